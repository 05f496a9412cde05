// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ruler session: taps in, scene updates out.

use kurbo::Point;
use ruler_measure::{AnchorPoint, Effects, MeasurementTracker};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{HitTester, LabelNode, MarkerNode, NodeHandle, SceneSink, SceneStyle};

/// Result of handling one tap or submitted point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapOutcome {
    /// The tap did not land on a tracked surface; nothing changed.
    Missed,
    /// A marker was placed; no measurement is complete yet.
    Placed {
        /// Handle of the new marker.
        marker: NodeHandle,
        /// `true` if a previous measurement was discarded to make room.
        restarted: bool,
    },
    /// A marker was placed and completed a measurement.
    Measured {
        /// Handle of the new marker.
        marker: NodeHandle,
        /// Handle of the new distance label.
        label: NodeHandle,
        /// Distance in meters.
        distance: f64,
    },
}

/// Drives a [`MeasurementTracker`] from taps and mirrors it into a scene.
///
/// The session remembers which nodes it rendered so they can be removed
/// exactly when the tracker discards the data they show: one marker per
/// buffered point, and one label while a measurement is complete.
#[derive(Clone, Debug, Default)]
pub struct RulerSession {
    tracker: MeasurementTracker,
    style: SceneStyle,
    markers: SmallVec<[NodeHandle; 2]>,
    label: Option<NodeHandle>,
}

impl RulerSession {
    /// Create a session with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a custom style.
    pub fn with_style(style: SceneStyle) -> Self {
        Self {
            tracker: MeasurementTracker::with_params(style.measure),
            style,
            markers: SmallVec::new(),
            label: None,
        }
    }

    /// Handle a tap at `screen`.
    ///
    /// Taps that miss every tracked surface are ignored.
    pub fn tap<H, S>(&mut self, screen: Point, hits: &H, scene: &mut S) -> TapOutcome
    where
        H: HitTester + ?Sized,
        S: SceneSink + ?Sized,
    {
        match hits.hit_test(screen) {
            Some(point) => self.submit_point(point, scene),
            None => {
                trace!(x = screen.x, y = screen.y, "tap missed tracked surfaces");
                TapOutcome::Missed
            }
        }
    }

    /// Record a world point directly, bypassing hit testing.
    pub fn submit_point<S>(&mut self, point: AnchorPoint, scene: &mut S) -> TapOutcome
    where
        S: SceneSink + ?Sized,
    {
        let effects = self.tracker.submit_point(point);
        self.release(effects, scene);

        let marker = scene.add_marker(&MarkerNode {
            position: point,
            radius: self.style.marker_radius,
        });
        self.markers.push(marker);

        if effects.contains(Effects::MEASURED)
            && let Some(label) = self.tracker.label()
        {
            let node = scene.add_label(&LabelNode {
                text: label.text.clone(),
                position: label.position,
                scale: label.scale,
                extrusion_depth: self.style.text_extrusion_depth,
            });
            self.label = Some(node);
            debug!(text = %label.text, ?marker, label = ?node, "label placed");
            return TapOutcome::Measured {
                marker,
                label: node,
                distance: label.distance,
            };
        }

        TapOutcome::Placed {
            marker,
            restarted: effects.contains(Effects::CLEARED),
        }
    }

    /// Discard the current measurement and remove everything it rendered.
    pub fn reset<S>(&mut self, scene: &mut S) -> Effects
    where
        S: SceneSink + ?Sized,
    {
        let effects = self.tracker.reset();
        self.release(effects, scene);
        effects
    }

    /// The underlying tracker.
    pub fn tracker(&self) -> &MeasurementTracker {
        &self.tracker
    }

    /// Style applied to new nodes.
    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    /// Handles of the live markers, oldest first.
    pub fn markers(&self) -> &[NodeHandle] {
        &self.markers
    }

    /// Handle of the live label, if a measurement is complete.
    pub fn label_node(&self) -> Option<NodeHandle> {
        self.label
    }

    fn release<S>(&mut self, effects: Effects, scene: &mut S)
    where
        S: SceneSink + ?Sized,
    {
        if effects.contains(Effects::CLEARED) {
            for marker in self.markers.drain(..) {
                scene.remove(marker);
            }
        }
        if effects.contains(Effects::LABEL_DISCARDED)
            && let Some(label) = self.label.take()
        {
            scene.remove(label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryScene, SceneNode};
    use alloc::vec::Vec;

    fn p(x: f64, y: f64, z: f64) -> AnchorPoint {
        AnchorPoint::new(x, y, z)
    }

    fn assert_in_sync(session: &RulerSession, scene: &MemoryScene) {
        let len = session.tracker().len();
        assert_eq!(scene.markers().len(), len, "one marker per buffered point");
        assert_eq!(
            scene.labels().len(),
            usize::from(len == 2),
            "a label exactly while two points are buffered"
        );
        for handle in session.markers() {
            assert!(scene.contains(*handle));
        }
    }

    #[test]
    fn two_points_render_markers_and_label() {
        let mut scene = MemoryScene::new();
        let mut session = RulerSession::new();

        let first = session.submit_point(p(0.0, 0.0, 0.0), &mut scene);
        assert!(matches!(first, TapOutcome::Placed { restarted: false, .. }));
        assert_in_sync(&session, &scene);

        let second = session.submit_point(p(0.0, 0.0, 0.1), &mut scene);
        let TapOutcome::Measured { label, distance, .. } = second else {
            panic!("expected a measurement, got {second:?}");
        };
        assert_eq!(distance, 0.1);
        assert_in_sync(&session, &scene);

        let Some(SceneNode::Label(node)) = scene.get(label) else {
            panic!("label handle should point at a label");
        };
        assert_eq!(node.text, "10.00 cm");
        assert_eq!(node.position, p(0.0, 0.01, 0.1));
        assert_eq!(node.scale, 0.0025);
        assert_eq!(node.extrusion_depth, 1.0);

        let radii: Vec<f64> = scene.markers().iter().map(|(_, m)| m.radius).collect();
        assert_eq!(radii, [0.005, 0.005]);
    }

    #[test]
    fn third_point_removes_previous_nodes() {
        let mut scene = MemoryScene::new();
        let mut session = RulerSession::new();

        session.submit_point(p(1.0, 2.0, 3.0), &mut scene);
        session.submit_point(p(4.0, 6.0, 3.0), &mut scene);
        let old_markers: Vec<_> = session.markers().to_vec();
        let old_label = session.label_node().expect("label after two points");

        let third = session.submit_point(p(9.0, 9.0, 9.0), &mut scene);
        assert!(matches!(third, TapOutcome::Placed { restarted: true, .. }));

        for handle in old_markers {
            assert!(!scene.contains(handle), "stale marker left in scene");
        }
        assert!(!scene.contains(old_label), "stale label left in scene");
        assert!(session.label_node().is_none());
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.markers()[0].1.position, p(9.0, 9.0, 9.0));
        assert_in_sync(&session, &scene);
    }

    #[test]
    fn missed_tap_changes_nothing() {
        let mut scene = MemoryScene::new();
        let mut session = RulerSession::new();
        let miss = |_: Point| -> Option<AnchorPoint> { None };

        assert_eq!(
            session.tap(Point::new(10.0, 10.0), &miss, &mut scene),
            TapOutcome::Missed
        );
        assert!(scene.is_empty());
        assert!(session.tracker().is_empty());

        // Also a no-op in the middle of a completed measurement.
        session.submit_point(p(0.0, 0.0, 0.0), &mut scene);
        session.submit_point(p(1.0, 0.0, 0.0), &mut scene);
        assert_eq!(
            session.tap(Point::new(10.0, 10.0), &miss, &mut scene),
            TapOutcome::Missed
        );
        assert_eq!(session.tracker().distance(), Some(1.0));
        assert_in_sync(&session, &scene);
    }

    #[test]
    fn taps_go_through_hit_tester() {
        let mut scene = MemoryScene::new();
        let mut session = RulerSession::new();
        // Screen pixels map to centimeters on the floor.
        let floor = |screen: Point| Some(AnchorPoint::new(screen.x / 100.0, 0.0, screen.y / 100.0));

        session.tap(Point::new(0.0, 0.0), &floor, &mut scene);
        let outcome = session.tap(Point::new(30.0, 40.0), &floor, &mut scene);

        let TapOutcome::Measured { distance, .. } = outcome else {
            panic!("expected a measurement, got {outcome:?}");
        };
        assert!((distance - 0.5).abs() < 1e-12);
        assert_eq!(scene.labels()[0].1.text, "50.00 cm");
    }

    #[test]
    fn reset_clears_scene() {
        let mut scene = MemoryScene::new();
        let mut session = RulerSession::new();

        assert_eq!(session.reset(&mut scene), Effects::empty());

        session.submit_point(p(0.0, 0.0, 0.0), &mut scene);
        session.submit_point(p(0.0, 0.0, 1.0), &mut scene);
        let effects = session.reset(&mut scene);

        assert_eq!(effects, Effects::CLEARED | Effects::LABEL_DISCARDED);
        assert!(scene.is_empty());
        assert!(session.markers().is_empty());
        assert!(session.label_node().is_none());
    }

    #[test]
    fn scene_stays_in_sync_over_many_taps() {
        let mut scene = MemoryScene::new();
        let mut session = RulerSession::new();
        for i in 0..11 {
            let x = f64::from(i) * 0.1;
            session.submit_point(p(x, 0.0, 0.0), &mut scene);
            assert_in_sync(&session, &scene);
        }
    }

    #[test]
    fn custom_style_is_applied() {
        let style = SceneStyle {
            marker_radius: 0.02,
            text_extrusion_depth: 0.5,
            ..SceneStyle::default()
        };
        let mut scene = MemoryScene::new();
        let mut session = RulerSession::with_style(style);
        session.submit_point(p(0.0, 0.0, 0.0), &mut scene);
        session.submit_point(p(0.0, 0.0, 2.0), &mut scene);

        assert_eq!(session.style().marker_radius, 0.02);
        assert_eq!(scene.markers()[0].1.radius, 0.02);
        assert_eq!(scene.labels()[0].1.extrusion_depth, 0.5);
        assert_eq!(scene.labels()[0].1.text, "200.00 cm");
    }

    #[test]
    fn works_through_trait_objects() {
        let mut scene = MemoryScene::new();
        let mut session = RulerSession::new();
        let hits: &dyn HitTester = &|_: Point| Some(AnchorPoint::ORIGIN);
        let sink: &mut dyn SceneSink = &mut scene;

        let outcome = session.tap(Point::ZERO, hits, sink);
        assert!(matches!(outcome, TapOutcome::Placed { .. }));
        assert_eq!(scene.len(), 1);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene output: what the ruler asks the host renderer to draw.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use ruler_measure::{AnchorPoint, MeasureParams};

/// Handle of a node created through a [`SceneSink`].
///
/// Handles are opaque to the ruler; a sink may hand out any value as long as
/// it stays unique while the node is alive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub u64);

/// A small sphere drawn at an anchor point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerNode {
    /// World-space center.
    pub position: AnchorPoint,
    /// Sphere radius in meters.
    pub radius: f64,
}

/// Extruded 3D text showing a distance readout.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelNode {
    /// Text content, e.g. `"12.34 cm"`.
    pub text: String,
    /// World-space position.
    pub position: AnchorPoint,
    /// Uniform scale applied to the text geometry.
    pub scale: f64,
    /// Extrusion depth of the glyphs, in font units (before `scale`).
    pub extrusion_depth: f64,
}

/// Any node the ruler renders.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    /// A point marker.
    Marker(MarkerNode),
    /// A distance label.
    Label(LabelNode),
}

/// Rendering collaborator supplied by the host.
///
/// The ruler never draws anything itself. It requests nodes through this
/// trait and removes them again when the data they show is discarded.
pub trait SceneSink {
    /// Render a marker and return its handle.
    fn add_marker(&mut self, marker: &MarkerNode) -> NodeHandle;

    /// Render a label and return its handle.
    fn add_label(&mut self, label: &LabelNode) -> NodeHandle;

    /// Remove a node previously returned by this sink.
    ///
    /// Unknown or already-removed handles should be ignored.
    fn remove(&mut self, node: NodeHandle);
}

/// Visual configuration for rendered nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    /// Marker sphere radius in meters.
    pub marker_radius: f64,
    /// Label glyph extrusion depth, in font units.
    pub text_extrusion_depth: f64,
    /// Label placement and scale.
    pub measure: MeasureParams,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            marker_radius: 0.005,
            text_extrusion_depth: 1.0,
            measure: MeasureParams::default(),
        }
    }
}

/// A [`SceneSink`] that keeps live nodes in memory.
///
/// Useful for tests, headless hosts, and as a staging area that a real
/// renderer diffs against.
#[derive(Clone, Debug, Default)]
pub struct MemoryScene {
    nodes: HashMap<NodeHandle, SceneNode>,
    next_handle: u64,
}

impl MemoryScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no nodes are live.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `node` is live.
    pub fn contains(&self, node: NodeHandle) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Look up a live node.
    pub fn get(&self, node: NodeHandle) -> Option<&SceneNode> {
        self.nodes.get(&node)
    }

    /// Live markers in creation order.
    pub fn markers(&self) -> Vec<(NodeHandle, &MarkerNode)> {
        let mut markers: Vec<_> = self
            .nodes
            .iter()
            .filter_map(|(handle, node)| match node {
                SceneNode::Marker(marker) => Some((*handle, marker)),
                SceneNode::Label(_) => None,
            })
            .collect();
        markers.sort_by_key(|(handle, _)| *handle);
        markers
    }

    /// Live labels in creation order.
    pub fn labels(&self) -> Vec<(NodeHandle, &LabelNode)> {
        let mut labels: Vec<_> = self
            .nodes
            .iter()
            .filter_map(|(handle, node)| match node {
                SceneNode::Label(label) => Some((*handle, label)),
                SceneNode::Marker(_) => None,
            })
            .collect();
        labels.sort_by_key(|(handle, _)| *handle);
        labels
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn insert(&mut self, node: SceneNode) -> NodeHandle {
        let handle = NodeHandle(self.next_handle);
        self.next_handle += 1;
        self.nodes.insert(handle, node);
        handle
    }
}

impl SceneSink for MemoryScene {
    fn add_marker(&mut self, marker: &MarkerNode) -> NodeHandle {
        self.insert(SceneNode::Marker(*marker))
    }

    fn add_label(&mut self, label: &LabelNode) -> NodeHandle {
        self.insert(SceneNode::Label(label.clone()))
    }

    fn remove(&mut self, node: NodeHandle) {
        self.nodes.remove(&node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_at(x: f64) -> MarkerNode {
        MarkerNode {
            position: AnchorPoint::new(x, 0.0, 0.0),
            radius: 0.005,
        }
    }

    #[test]
    fn handles_are_unique_and_ordered() {
        let mut scene = MemoryScene::new();
        let a = scene.add_marker(&marker_at(0.0));
        let b = scene.add_marker(&marker_at(1.0));
        assert_ne!(a, b);

        let markers = scene.markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].0, a);
        assert_eq!(markers[1].0, b);
        assert_eq!(markers[1].1.position.x, 1.0);
    }

    #[test]
    fn remove_drops_node_and_ignores_unknown() {
        let mut scene = MemoryScene::new();
        let a = scene.add_marker(&marker_at(0.0));
        scene.remove(a);
        assert!(!scene.contains(a));
        assert!(scene.is_empty());

        // Removing again is harmless, and handles are not reused.
        scene.remove(a);
        let b = scene.add_marker(&marker_at(0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn labels_and_markers_are_kept_apart() {
        let mut scene = MemoryScene::new();
        scene.add_marker(&marker_at(0.0));
        let label = scene.add_label(&LabelNode {
            text: String::from("1.00 cm"),
            position: AnchorPoint::new(0.0, 0.01, 0.0),
            scale: 0.0025,
            extrusion_depth: 1.0,
        });

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.markers().len(), 1);
        let labels = scene.labels();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].0, label);
        assert_eq!(labels[0].1.text, "1.00 cm");
        assert!(matches!(scene.get(label), Some(SceneNode::Label(_))));

        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn default_style_matches_ruler_look() {
        let style = SceneStyle::default();
        assert_eq!(style.marker_radius, 0.005);
        assert_eq!(style.text_extrusion_depth, 1.0);
        assert_eq!(style.measure, MeasureParams::default());
    }
}

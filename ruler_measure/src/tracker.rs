// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement tracker: anchor bookkeeping plus the derived label.

use tracing::{debug, trace};

use crate::{AnchorBuffer, AnchorPoint, MeasureParams, MeasurementLabel};

bitflags::bitflags! {
    /// What a tracker operation changed.
    ///
    /// Hosts that mirror the tracker into a scene use these to decide which
    /// rendered nodes to drop or create.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Effects: u8 {
        /// Previously buffered points were discarded.
        const CLEARED         = 0b0000_0001;
        /// A previously produced label was discarded.
        const LABEL_DISCARDED = 0b0000_0010;
        /// A new point was appended.
        const POINT_ADDED     = 0b0000_0100;
        /// The buffer became full and a new label was produced.
        const MEASURED        = 0b0000_1000;
    }
}

/// Tracks the two most recent anchor points and the distance between them.
///
/// Submitting a point onto a full buffer starts a fresh measurement: both old
/// points and the old label are discarded before the new point is recorded.
/// A label exists exactly when two points are buffered.
#[derive(Clone, Debug, Default)]
pub struct MeasurementTracker {
    buffer: AnchorBuffer,
    label: Option<MeasurementLabel>,
    params: MeasureParams,
}

impl MeasurementTracker {
    /// Create an empty tracker with default label parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tracker with custom label parameters.
    pub fn with_params(params: MeasureParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Label parameters in use.
    pub fn params(&self) -> &MeasureParams {
        &self.params
    }

    /// Discard all buffered points and the current label.
    ///
    /// Calling this on an empty tracker is a no-op and returns no effects.
    pub fn reset(&mut self) -> Effects {
        let mut effects = Effects::empty();
        if self.buffer.clear() {
            effects |= Effects::CLEARED;
        }
        if self.label.take().is_some() {
            effects |= Effects::LABEL_DISCARDED;
        }
        if !effects.is_empty() {
            debug!(?effects, "measurement reset");
        }
        effects
    }

    /// Record a new anchor point.
    ///
    /// If two points are already buffered this first behaves like
    /// [`reset`](Self::reset). When the point completes a pair, the distance
    /// is computed and a new [`MeasurementLabel`] becomes available.
    pub fn submit_point(&mut self, point: AnchorPoint) -> Effects {
        let mut effects = if self.buffer.is_full() {
            self.reset()
        } else {
            Effects::empty()
        };

        self.buffer.push(point);
        effects |= Effects::POINT_ADDED;
        trace!(x = point.x, y = point.y, z = point.z, len = self.buffer.len(), "anchor added");

        if let Some((start, end)) = self.buffer.span() {
            let label = MeasurementLabel::between(start, end, &self.params);
            debug!(distance = label.distance, text = %label.text, "measured");
            self.label = Some(label);
            effects |= Effects::MEASURED;
        }
        effects
    }

    /// Distance in meters between the two buffered points, if there are two.
    pub fn distance(&self) -> Option<f64> {
        self.buffer.span().map(|(start, end)| start.distance(end))
    }

    /// The current label, present only while two points are buffered.
    pub fn label(&self) -> Option<&MeasurementLabel> {
        self.label.as_ref()
    }

    /// Buffered points, oldest first.
    pub fn points(&self) -> &[AnchorPoint] {
        self.buffer.as_slice()
    }

    /// Number of buffered points (0, 1, or 2).
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if no points are buffered.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

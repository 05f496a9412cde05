// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-slot anchor buffer.

use smallvec::SmallVec;

use crate::AnchorPoint;

const SLOTS: usize = 2;

/// An ordered buffer holding at most two [`AnchorPoint`]s.
///
/// Pushing onto a full buffer does not shift out the oldest point: it clears
/// the buffer and starts over, so the new point becomes the only element.
/// The length is therefore always 0, 1, or 2.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorBuffer {
    points: SmallVec<[AnchorPoint; SLOTS]>,
}

impl AnchorBuffer {
    /// Maximum number of buffered points.
    pub const CAPACITY: usize = SLOTS;

    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `point`, clearing the buffer first if it is full.
    ///
    /// Returns `true` if previously buffered points were discarded.
    pub fn push(&mut self, point: AnchorPoint) -> bool {
        let evicted = self.is_full();
        if evicted {
            self.points.clear();
        }
        self.points.push(point);
        evicted
    }

    /// Remove every point. Returns `true` if the buffer was non-empty.
    pub fn clear(&mut self) -> bool {
        let had_points = !self.points.is_empty();
        self.points.clear();
        had_points
    }

    /// Number of buffered points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points are buffered.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the next push will start over.
    pub fn is_full(&self) -> bool {
        self.points.len() >= Self::CAPACITY
    }

    /// The oldest buffered point.
    pub fn first(&self) -> Option<AnchorPoint> {
        self.points.first().copied()
    }

    /// The newest buffered point.
    pub fn last(&self) -> Option<AnchorPoint> {
        self.points.last().copied()
    }

    /// The `(first, last)` pair when the buffer is full.
    pub fn span(&self) -> Option<(AnchorPoint, AnchorPoint)> {
        match self.points.as_slice() {
            [start, end] => Some((*start, *end)),
            _ => None,
        }
    }

    /// Buffered points, oldest first.
    pub fn as_slice(&self) -> &[AnchorPoint] {
        &self.points
    }

    /// Iterate over buffered points, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &AnchorPoint> {
        self.points.iter()
    }
}

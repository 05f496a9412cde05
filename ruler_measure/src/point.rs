// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World-space anchor points.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::MeasureError;

/// A position in world space, in meters.
///
/// World space is the coordinate system of the tracking session and stays
/// fixed to the physical environment. The vertical (up) axis is `+y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorPoint {
    /// X coordinate in meters.
    pub x: f64,
    /// Y coordinate (up) in meters.
    pub y: f64,
    /// Z coordinate in meters.
    pub z: f64,
}

impl AnchorPoint {
    /// The world origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a point without validation.
    ///
    /// Coordinates are assumed to be finite; use [`AnchorPoint::try_new`]
    /// when the values come from an untrusted source.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a point, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64, z: f64) -> Result<Self, MeasureError> {
        let point = Self::new(x, y, z);
        if point.is_finite() {
            Ok(point)
        } else {
            Err(MeasureError::NonFinite { x, y, z })
        }
    }

    /// Returns `true` if every coordinate is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Euclidean distance to `other`, in meters. Never negative.
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// This point moved by `dy` along the up axis.
    pub const fn lifted(self, dy: f64) -> Self {
        Self::new(self.x, self.y + dy, self.z)
    }

    /// Coordinates as `[x, y, z]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for AnchorPoint {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for AnchorPoint {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// Euclidean distance between two anchor points, in meters.
pub fn distance(a: AnchorPoint, b: AnchorPoint) -> f64 {
    a.distance(b)
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing: from a screen-space tap to a world-space anchor point.
//!
//! The host's tracking system normally answers these queries. The
//! [`PlaneHitTester`] here covers the common case of horizontal surfaces
//! whose height and extent are already known, seen through a pinhole
//! [`Camera`].

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};
use ruler_measure::AnchorPoint;

use crate::CameraError;

/// Resolves screen-space taps to world-space points on tracked surfaces.
pub trait HitTester {
    /// The world point under `screen`, or `None` if the tap does not land on
    /// a tracked surface.
    fn hit_test(&self, screen: Point) -> Option<AnchorPoint>;
}

impl<F> HitTester for F
where
    F: Fn(Point) -> Option<AnchorPoint>,
{
    fn hit_test(&self, screen: Point) -> Option<AnchorPoint> {
        self(screen)
    }
}

/// A direction or offset in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component (up).
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// World up, `+y`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// Create a vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The offset from `from` to `to`.
    pub fn between(from: AnchorPoint, to: AnchorPoint) -> Self {
        Self::new(to.x - from.x, to.y - from.y, to.z - from.z)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    pub fn normalize(self) -> Option<Self> {
        let len = self.length();
        (len > f64::EPSILON && len.is_finite())
            .then(|| Self::new(self.x / len, self.y / len, self.z / len))
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl core::ops::Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A half-line in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Start of the ray.
    pub origin: AnchorPoint,
    /// Direction of travel; not necessarily unit length.
    pub direction: Vec3,
}

impl Ray {
    /// The point at parameter `t` along the ray.
    pub fn at(&self, t: f64) -> AnchorPoint {
        AnchorPoint::new(
            self.origin.x + self.direction.x * t,
            self.origin.y + self.direction.y * t,
            self.origin.z + self.direction.z * t,
        )
    }
}

/// A pinhole camera with square pixels and the principal point at the
/// viewport center.
///
/// Screen coordinates follow the usual UI convention: origin at the top-left,
/// `y` growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    eye: AnchorPoint,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    focal_length: f64,
    viewport: Size,
}

impl Camera {
    /// Build a camera at `eye` looking at `target`.
    ///
    /// `up_hint` picks the camera roll; it only needs to be non-parallel to
    /// the view direction. `focal_length` is in pixels.
    pub fn look_at(
        eye: AnchorPoint,
        target: AnchorPoint,
        up_hint: Vec3,
        focal_length: f64,
        viewport: Size,
    ) -> Result<Self, CameraError> {
        let eye = AnchorPoint::try_new(eye.x, eye.y, eye.z)?;
        let target = AnchorPoint::try_new(target.x, target.y, target.z)?;
        if !(focal_length.is_finite() && focal_length > 0.0) {
            return Err(CameraError::InvalidFocalLength(focal_length));
        }
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            return Err(CameraError::EmptyViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let forward = Vec3::between(eye, target)
            .normalize()
            .ok_or(CameraError::ZeroViewDirection)?;
        let right = forward
            .cross(up_hint)
            .normalize()
            .ok_or(CameraError::ParallelUp)?;
        let up = right.cross(forward);
        Ok(Self {
            eye,
            forward,
            right,
            up,
            focal_length,
            viewport,
        })
    }

    /// Camera position.
    pub fn eye(&self) -> AnchorPoint {
        self.eye
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The ray from the eye through `screen`.
    pub fn ray_through(&self, screen: Point) -> Ray {
        let center = self.viewport.to_rect().center();
        let sx = (screen.x - center.x) / self.focal_length;
        let sy = (screen.y - center.y) / self.focal_length;
        Ray {
            origin: self.eye,
            direction: self.forward + self.right * sx + self.up * -sy,
        }
    }
}

/// A tracked horizontal surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalPlane {
    /// Height of the surface along the up axis, in meters.
    pub height: f64,
    /// Known extent of the surface in world `(x, z)`, or `None` for an
    /// unbounded plane.
    pub extent: Option<Rect>,
}

impl HorizontalPlane {
    /// An unbounded plane at `height`.
    pub const fn infinite(height: f64) -> Self {
        Self {
            height,
            extent: None,
        }
    }

    /// A plane at `height` covering `extent` in world `(x, z)`.
    pub const fn bounded(height: f64, extent: Rect) -> Self {
        Self {
            height,
            extent: Some(extent),
        }
    }

    /// Ray parameter of the intersection in front of the ray origin, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let dy = ray.direction.y;
        if dy.abs() <= f64::EPSILON {
            return None;
        }
        let t = (self.height - ray.origin.y) / dy;
        if !(t.is_finite() && t > 0.0) {
            return None;
        }
        if let Some(extent) = self.extent {
            let hit = ray.at(t);
            if !extent.contains(Point::new(hit.x, hit.z)) {
                return None;
            }
        }
        Some(t)
    }
}

/// Hit tests taps against a set of horizontal planes through a [`Camera`].
///
/// The nearest plane in front of the camera wins.
#[derive(Clone, Debug)]
pub struct PlaneHitTester {
    /// Camera used to turn screen points into rays.
    pub camera: Camera,
    /// Tracked surfaces.
    pub planes: Vec<HorizontalPlane>,
}

impl PlaneHitTester {
    /// Create a hit tester with no surfaces.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            planes: Vec::new(),
        }
    }

    /// Add a tracked surface.
    pub fn with_plane(mut self, plane: HorizontalPlane) -> Self {
        self.planes.push(plane);
        self
    }
}

impl HitTester for PlaneHitTester {
    fn hit_test(&self, screen: Point) -> Option<AnchorPoint> {
        let ray = self.camera.ray_through(screen);
        let t = self
            .planes
            .iter()
            .filter_map(|plane| plane.intersect(&ray))
            .min_by(f64::total_cmp)?;
        let hit = ray.at(t);
        AnchorPoint::try_new(hit.x, hit.y, hit.z).ok()
    }
}

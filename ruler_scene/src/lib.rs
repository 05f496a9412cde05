// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler Scene: the host-facing side of a tap-to-measure ruler.
//!
//! [`ruler_measure`] keeps the measurement itself. This crate connects it to
//! the two things a host AR environment provides:
//!
//! - **Hit testing** ([`HitTester`]): turns a screen-space tap into a world
//!   point on a tracked surface, or reports that the tap missed.
//!   [`PlaneHitTester`] implements this for known horizontal planes seen
//!   through a pinhole [`Camera`]; closures `Fn(Point) -> Option<AnchorPoint>`
//!   work too.
//! - **Rendering** ([`SceneSink`]): receives requests to add point markers and
//!   distance labels and to remove them again. [`MemoryScene`] is an
//!   in-memory implementation.
//!
//! [`RulerSession`] wires the two together. Each tap is hit tested, the point
//! is submitted to the tracker, and the scene is updated so that it always
//! shows one marker per buffered point plus a label while a measurement is
//! complete. Taps that miss are ignored.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Size};
//! use ruler_measure::AnchorPoint;
//! use ruler_scene::{
//!     Camera, HorizontalPlane, MemoryScene, PlaneHitTester, RulerSession, TapOutcome, Vec3,
//! };
//!
//! // Looking straight down at the floor from 1.5m.
//! let camera = Camera::look_at(
//!     AnchorPoint::new(0.0, 1.5, 0.0),
//!     AnchorPoint::ORIGIN,
//!     Vec3::new(0.0, 0.0, -1.0),
//!     100.0,
//!     Size::new(400.0, 300.0),
//! )?;
//! let hits = PlaneHitTester::new(camera).with_plane(HorizontalPlane::infinite(0.0));
//!
//! let mut scene = MemoryScene::new();
//! let mut session = RulerSession::new();
//! session.tap(Point::new(200.0, 150.0), &hits, &mut scene);
//! let outcome = session.tap(Point::new(300.0, 150.0), &hits, &mut scene);
//!
//! assert!(matches!(outcome, TapOutcome::Measured { .. }));
//! assert_eq!(scene.labels()[0].1.text, "150.00 cm");
//! # Ok::<(), ruler_scene::CameraError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod hit;
mod scene;
mod session;

pub use error::CameraError;
pub use hit::{Camera, HitTester, HorizontalPlane, PlaneHitTester, Ray, Vec3};
pub use scene::{LabelNode, MarkerNode, MemoryScene, NodeHandle, SceneNode, SceneSink, SceneStyle};
pub use session::{RulerSession, TapOutcome};

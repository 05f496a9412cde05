// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler Measure: two-point distance tracking for tap-to-measure rulers.
//!
//! The user places points one at a time (typically by tapping a tracked
//! surface in an AR view). This crate keeps the bookkeeping for those
//! points and derives the readout; it knows nothing about cameras, surface
//! detection, or rendering.
//!
//! - [`AnchorPoint`]: a world-space position in meters, `+y` up.
//! - [`AnchorBuffer`]: at most two points. Pushing onto a full buffer clears
//!   it and starts over rather than sliding a window.
//! - [`MeasurementTracker`]: owns the buffer and the current
//!   [`MeasurementLabel`], and reports what each operation changed as
//!   [`Effects`] so a host can keep its rendered markers in sync.
//! - [`MeasureParams`]: label placement (lift above the end point) and scale.
//!
//! ## Example
//!
//! ```
//! use ruler_measure::{AnchorPoint, Effects, MeasurementTracker};
//!
//! let mut tracker = MeasurementTracker::new();
//! tracker.submit_point(AnchorPoint::new(1.0, 2.0, 3.0));
//! let effects = tracker.submit_point(AnchorPoint::new(4.0, 6.0, 3.0));
//!
//! assert!(effects.contains(Effects::MEASURED));
//! assert_eq!(tracker.distance(), Some(5.0));
//! assert_eq!(tracker.label().unwrap().text, "500.00 cm");
//!
//! // A third point starts a new measurement.
//! let effects = tracker.submit_point(AnchorPoint::ORIGIN);
//! assert!(effects.contains(Effects::CLEARED | Effects::LABEL_DISCARDED));
//! assert_eq!(tracker.len(), 1);
//! assert!(tracker.label().is_none());
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

mod buffer;
mod error;
mod label;
mod point;
mod tracker;

pub use buffer::AnchorBuffer;
pub use error::MeasureError;
pub use label::{CENTIMETERS_PER_METER, MeasureParams, MeasurementLabel, format_centimeters};
pub use point::{AnchorPoint, distance};
pub use tracker::{Effects, MeasurementTracker};

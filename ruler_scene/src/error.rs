// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for camera construction.

use ruler_measure::MeasureError;
use thiserror::Error;

/// Reasons a [`Camera`](crate::Camera) cannot be built.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CameraError {
    /// Focal length was zero, negative, or not finite.
    #[error("focal length must be positive and finite, got {0}")]
    InvalidFocalLength(f64),
    /// Viewport had no area.
    #[error("viewport must have a positive area, got {width}x{height}")]
    EmptyViewport {
        /// Viewport width in pixels.
        width: f64,
        /// Viewport height in pixels.
        height: f64,
    },
    /// Eye and target are the same point.
    #[error("eye and target coincide; view direction is undefined")]
    ZeroViewDirection,
    /// The up hint is parallel to the view direction.
    #[error("up hint is parallel to the view direction")]
    ParallelUp,
    /// Eye or target had a non-finite coordinate.
    #[error(transparent)]
    NonFinite(#[from] MeasureError),
}

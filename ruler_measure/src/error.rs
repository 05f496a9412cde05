// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for measurement inputs.

use thiserror::Error;

/// Errors produced when validating measurement inputs.
///
/// Tracking itself is total; this only covers construction of inputs that
/// cannot be measured at all.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum MeasureError {
    /// A coordinate was NaN or infinite.
    #[error("anchor point has a non-finite coordinate: ({x}, {y}, {z})")]
    NonFinite {
        /// Rejected x coordinate.
        x: f64,
        /// Rejected y coordinate.
        y: f64,
        /// Rejected z coordinate.
        z: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn non_finite_display_names_coordinates() {
        let err = MeasureError::NonFinite {
            x: 1.0,
            y: f64::NAN,
            z: 0.5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("non-finite"), "unexpected message: {msg}");
        assert!(msg.contains("NaN"), "unexpected message: {msg}");
    }
}

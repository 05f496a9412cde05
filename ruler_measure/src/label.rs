// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance labels: formatting and placement.

use alloc::format;
use alloc::string::String;

use crate::AnchorPoint;

/// Conversion factor from world units (meters) to displayed centimeters.
pub const CENTIMETERS_PER_METER: f64 = 100.0;

/// Parameters controlling where and how large a distance label appears.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureParams {
    /// Offset along the up axis from the second anchor point, in meters.
    ///
    /// Keeps the label floating just above the end marker instead of
    /// intersecting it.
    pub label_lift: f64,
    /// Uniform scale applied to the label glyphs.
    ///
    /// Text geometry is authored in font units; this brings it down to a
    /// readable size at real-world scale.
    pub label_scale: f64,
}

impl Default for MeasureParams {
    fn default() -> Self {
        Self {
            label_lift: 0.01,
            label_scale: 0.0025,
        }
    }
}

/// Format a distance in meters as centimeters with two decimals, e.g. `"12.34 cm"`.
pub fn format_centimeters(meters: f64) -> String {
    format!("{:.2} cm", meters * CENTIMETERS_PER_METER)
}

/// A distance readout derived from a completed pair of anchor points.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementLabel {
    /// Display text, see [`format_centimeters`].
    pub text: String,
    /// Raw distance in meters.
    pub distance: f64,
    /// World-space position of the label.
    pub position: AnchorPoint,
    /// Uniform display scale.
    pub scale: f64,
}

impl MeasurementLabel {
    /// Build the label for a measurement from `start` to `end`.
    ///
    /// The label sits above `end`, lifted by [`MeasureParams::label_lift`].
    pub fn between(start: AnchorPoint, end: AnchorPoint, params: &MeasureParams) -> Self {
        let distance = start.distance(end);
        Self {
            text: format_centimeters(distance),
            distance,
            position: end.lifted(params.label_lift),
            scale: params.label_scale,
        }
    }

    /// The distance in centimeters.
    pub fn centimeters(&self) -> f64 {
        self.distance * CENTIMETERS_PER_METER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_fraction_digits() {
        assert_eq!(format_centimeters(0.1), "10.00 cm");
        assert_eq!(format_centimeters(5.0), "500.00 cm");
        assert_eq!(format_centimeters(0.0), "0.00 cm");
        assert_eq!(format_centimeters(0.123_4), "12.34 cm");
    }

    #[test]
    fn label_floats_above_second_point() {
        let params = MeasureParams::default();
        let start = AnchorPoint::new(0.0, 0.0, 0.0);
        let end = AnchorPoint::new(0.0, 0.0, 0.1);
        let label = MeasurementLabel::between(start, end, &params);

        assert_eq!(label.text, "10.00 cm");
        assert_eq!(label.position, AnchorPoint::new(0.0, 0.01, 0.1));
        assert_eq!(label.scale, 0.0025);
    }

    #[test]
    fn custom_params_are_applied() {
        let params = MeasureParams {
            label_lift: 0.5,
            label_scale: 0.01,
        };
        let label = MeasurementLabel::between(
            AnchorPoint::new(1.0, 2.0, 3.0),
            AnchorPoint::new(4.0, 6.0, 3.0),
            &params,
        );
        assert_eq!(label.text, "500.00 cm");
        assert_eq!(label.distance, 5.0);
        assert_eq!(label.centimeters(), 500.0);
        assert_eq!(label.position, AnchorPoint::new(4.0, 6.5, 3.0));
        assert_eq!(label.scale, 0.01);
    }
}

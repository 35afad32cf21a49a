// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The live metrics snapshot displayed next to the canvas.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Circle;

use crate::area::{disc_area, overlap_area};

/// A snapshot of the derived quantities for the current pair of circles.
///
/// Every field is a finite `f64` for every input. The ratio fields fall
/// back to `0.0` whenever their denominator is zero, so degenerate scenes
/// (absent circles, zero radii) produce all-zero rows rather than NaN.
///
/// Values are full precision; apply [`Metrics::rounded`] (or your own
/// formatting) only at the display boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Area of the self circle, `0.0` when it is absent.
    pub self_area: f64,
    /// Area of the nature circle, `0.0` when it is absent.
    pub nature_area: f64,
    /// `nature_area / self_area`, or `0.0` when the self area is zero
    /// (absent or degenerate), regardless of the nature area.
    pub area_ratio: f64,
    /// Euclidean distance between the two centers, `0.0` when either
    /// circle is absent.
    pub distance: f64,
    /// Area of the overlap region, `0.0` when either circle is absent.
    pub overlap_area: f64,
    /// `overlap_area / (self_area + nature_area)`, or `0.0` when that sum
    /// is zero. At most `0.5`, reached by two coincident equal circles.
    pub overlap_ratio: f64,
}

impl Metrics {
    /// Measures the current pair of circles.
    ///
    /// Either circle may be absent; the fallback rules on the individual
    /// fields apply.
    #[must_use]
    pub fn measure(self_circle: Option<Circle>, nature_circle: Option<Circle>) -> Self {
        let self_area = self_circle.map_or(0.0, |c| disc_area(c.radius));
        let nature_area = nature_circle.map_or(0.0, |c| disc_area(c.radius));

        let (distance, overlap) = match (self_circle, nature_circle) {
            (Some(a), Some(b)) => ((b.center - a.center).hypot(), overlap_area(a, b)),
            _ => (0.0, 0.0),
        };

        let area_ratio = if self_area > 0.0 {
            nature_area / self_area
        } else {
            0.0
        };
        let total = self_area + nature_area;
        let overlap_ratio = if total > 0.0 { overlap / total } else { 0.0 };

        Self {
            self_area,
            nature_area,
            area_ratio,
            distance,
            overlap_area: overlap,
            overlap_ratio,
        }
    }

    /// Returns a copy with every field rounded to `decimals` decimal
    /// digits, for display.
    #[must_use]
    pub fn rounded(self, decimals: u8) -> Self {
        let scale = 10.0_f64.powi(i32::from(decimals));
        let round = |v: f64| (v * scale).round() / scale;
        Self {
            self_area: round(self.self_area),
            nature_area: round(self.nature_area),
            area_ratio: round(self.area_ratio),
            distance: round(self.distance),
            overlap_area: round(self.overlap_area),
            overlap_ratio: round(self.overlap_ratio),
        }
    }
}

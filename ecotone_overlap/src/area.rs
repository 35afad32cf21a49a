// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area helpers for discs and disc-disc overlap regions.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Circle;

/// Area of a full disc with the given radius.
///
/// Radii are expected to be non-negative; a zero radius yields a zero area.
#[must_use]
pub fn disc_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Area of the overlap region of two discs.
///
/// Returns `0.0` when the discs are disjoint or externally tangent, the
/// smaller disc's full area when one disc contains the other (including
/// internal tangency), and the lens area when they properly intersect.
///
/// The result is symmetric in its arguments and always finite. Two
/// coincident zero-radius circles are degenerate points and yield `0.0`.
#[must_use]
pub fn overlap_area(a: Circle, b: Circle) -> f64 {
    let d = (b.center - a.center).hypot();
    let r1 = a.radius;
    let r2 = b.radius;

    if d >= r1 + r2 {
        return 0.0;
    }
    if d <= (r1 - r2).abs() {
        return disc_area(r1.min(r2));
    }

    // Lens: sum of the two circular segments cut off by the chord through
    // the intersection points. The cosine arguments are within [-1, 1] for
    // exact arithmetic given the branch guards above; clamp so float
    // rounding near the tangency boundaries cannot produce NaN.
    let cos1 = ((r1 * r1 + d * d - r2 * r2) / (2.0 * r1 * d)).clamp(-1.0, 1.0);
    let cos2 = ((r2 * r2 + d * d - r1 * r1) / (2.0 * r2 * d)).clamp(-1.0, 1.0);
    let angle1 = 2.0 * cos1.acos();
    let angle2 = 2.0 * cos2.acos();
    let segment1 = 0.5 * r1 * r1 * (angle1 - angle1.sin());
    let segment2 = 0.5 * r2 * r2 * (angle2 - angle2.sin());
    segment1 + segment2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn disjoint_circles_do_not_overlap() {
        let a = Circle::new((0.0, 0.0), 3.0);
        let b = Circle::new((10.0, 0.0), 3.0);
        assert_eq!(overlap_area(a, b), 0.0);
    }

    #[test]
    fn externally_tangent_circles_do_not_overlap() {
        let a = Circle::new((0.0, 0.0), 4.0);
        let b = Circle::new((9.0, 0.0), 5.0);
        assert_eq!(overlap_area(a, b), 0.0);
    }

    #[test]
    fn contained_circle_overlaps_with_its_full_area() {
        let outer = Circle::new((0.0, 0.0), 10.0);
        let inner = Circle::new((2.0, 1.0), 3.0);
        assert_close(overlap_area(outer, inner), disc_area(3.0));
    }

    #[test]
    fn internally_tangent_circle_overlaps_with_its_full_area() {
        let outer = Circle::new((0.0, 0.0), 10.0);
        let inner = Circle::new((6.0, 0.0), 4.0);
        assert_close(overlap_area(outer, inner), disc_area(4.0));
    }

    #[test]
    fn coincident_equal_circles_overlap_fully() {
        let a = Circle::new((0.0, 0.0), 5.0);
        let b = Circle::new((0.0, 0.0), 5.0);
        assert_close(overlap_area(a, b), disc_area(5.0));
    }

    #[test]
    fn coincident_unequal_circles_overlap_with_smaller_area() {
        let a = Circle::new((3.0, 3.0), 7.0);
        let b = Circle::new((3.0, 3.0), 2.0);
        assert_close(overlap_area(a, b), disc_area(2.0));
    }

    #[test]
    fn degenerate_point_circles_have_zero_overlap() {
        let a = Circle::new((1.0, 1.0), 0.0);
        let b = Circle::new((1.0, 1.0), 0.0);
        assert_eq!(overlap_area(a, b), 0.0);
    }

    #[test]
    fn lens_overlap_is_between_zero_and_either_disc() {
        let a = Circle::new((0.0, 0.0), 10.0);
        let b = Circle::new((15.0, 0.0), 10.0);
        let lens = overlap_area(a, b);
        assert!(lens > 0.0, "properly intersecting circles must overlap");
        assert!(lens < disc_area(10.0), "lens cannot exceed a full disc");
    }

    #[test]
    fn lens_matches_closed_form_for_equal_radii() {
        // For equal radii r at distance d, the lens area is
        // 2r²·acos(d/2r) − (d/2)·√(4r² − d²).
        let r = 10.0;
        let d = 15.0;
        let a = Circle::new((0.0, 0.0), r);
        let b = Circle::new((d, 0.0), r);
        let expected = 2.0 * r * r * (d / (2.0 * r)).acos()
            - (d / 2.0) * (4.0 * r * r - d * d).sqrt();
        assert_close(overlap_area(a, b), expected);
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Circle::new((0.0, 0.0), 6.0);
        let b = Circle::new((4.0, 3.0), 9.0);
        assert_close(overlap_area(a, b), overlap_area(b, a));
    }

    #[test]
    fn near_tangent_configurations_stay_finite() {
        // Just inside external tangency; the acos argument lands within a
        // few ulps of 1.
        let a = Circle::new((0.0, 0.0), 5.0);
        let b = Circle::new((10.0 - 1e-12, 0.0), 5.0);
        let lens = overlap_area(a, b);
        assert!(lens.is_finite(), "near-tangent overlap must be finite");
        assert!(lens >= 0.0, "overlap area is never negative");
    }
}

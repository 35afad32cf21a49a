// Copyright 2026 the Ecotone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecotone_overlap --heading-base-level=0

//! Ecotone Overlap: circle-circle overlap geometry and live metrics.
//!
//! This crate is the pure-computation half of Ecotone: given the current
//! "self" and "nature" circles (either of which may be absent), it produces
//! the derived quantities a presentation layer displays live while the user
//! draws and drags — individual disc areas, the area of the overlap region,
//! and the ratios between them.
//!
//! It holds no state and knows nothing about scenes, pointers, or
//! rendering. Callers hand it plain [`kurbo::Circle`] values and get plain
//! numbers back.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Circle;
//! use ecotone_overlap::Metrics;
//!
//! // Two equal circles whose centers are 15 units apart.
//! let a = Circle::new((0.0, 0.0), 10.0);
//! let b = Circle::new((15.0, 0.0), 10.0);
//!
//! let metrics = Metrics::measure(Some(a), Some(b));
//! assert_eq!(metrics.distance, 15.0);
//! assert!(metrics.overlap_area > 0.0);
//! assert!(metrics.overlap_ratio < 0.5);
//! ```
//!
//! ## Overlap area
//!
//! [`overlap_area`] distinguishes three configurations of two circles with
//! radii `r1`, `r2` and center distance `d`:
//!
//! - **Disjoint or externally tangent** (`d >= r1 + r2`): the overlap is
//!   empty and the area is `0`.
//! - **Contained or internally tangent** (`d <= |r1 - r2|`): the smaller
//!   disc lies entirely inside the larger one and the overlap is the
//!   smaller disc, `π·min(r1, r2)²`.
//! - **Properly intersecting**: the overlap is a lens, computed as the sum
//!   of the two circular segments cut off by the chord through the
//!   intersection points.
//!
//! ## Degenerate inputs
//!
//! Every value in [`Metrics`] is finite for every input, including absent
//! circles, zero radii, and coincident centers. Ratios whose denominator
//! would be zero are defined as `0` rather than NaN or infinity; see the
//! field docs on [`Metrics`] for the exact rules. Callers never need to
//! pre-filter degenerate scenes.
//!
//! ## Precision
//!
//! All computation is full-precision `f64`. Rounding for display (the
//! typical UI shows three decimals) is strictly a presentation concern;
//! [`Metrics::rounded`] is provided as a convenience for that boundary and
//! is never applied internally.
//!
//! This crate is `no_std`.

#![no_std]

mod area;
mod metrics;

pub use area::{disc_area, overlap_area};
pub use metrics::Metrics;

//! # Geometry Kernel
//!
//! Distance primitives used by every rasterizer. All functions are total over
//! finite input: coincident points and zero-length segments are resolved by
//! explicit policy instead of errors.
//!
//! ## Point to segment
//!
//! ```text
//!              point
//!              /|\
//!    to_start /h| \ to_end
//!            /  |  \
//!     start ───────── end
//!          α            β
//! ```
//!
//! The base angles `α` and `β` come from the law of cosines. If either is
//! obtuse the foot of the perpendicular `h` lies outside the segment.

use crate::coords::CartesianPoint;
use crate::error::{PovError, PovResult};
use std::f64::consts::{FRAC_PI_2, PI};

/// Distance reported for points outside a cylinder's span.
///
/// Compares greater than any real thickness, so such points never match.
pub const UNREACHABLE_DISTANCE: f64 = f64::MAX;

/// How a segment treats points whose closest approach lies past an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentMode {
    /// Measure to the nearest endpoint, giving round caps.
    #[default]
    Capped,
    /// Report [`UNREACHABLE_DISTANCE`], giving flat caps.
    Cylinder,
}

/// Euclidean distance between two points of any dimension.
///
/// # Examples
/// ```
/// use pov_image::geometry::distance;
///
/// assert_eq!(distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap(), 5.0);
/// assert!(distance(&[0.0, 0.0, 0.0], &[1.0, 1.0]).is_err());
/// ```
pub fn distance(a: &[f64], b: &[f64]) -> PovResult<f64> {
    if a.len() != b.len() {
        return Err(PovError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a
        .iter()
        .zip(b)
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        .sqrt())
}

/// Distance between two 3-D points.
#[inline]
pub fn point_distance(a: CartesianPoint, b: CartesianPoint) -> f64 {
    a.distance(b)
}

/// Angle between sides `b` and `c` of a triangle with sides `a`, `b`, `c`.
///
/// The cosine is clamped to `[-1, 1]` first. Near-degenerate triangles
/// (very short `b` or `c`) otherwise overshoot and `acos` returns NaN.
///
/// # Examples
/// ```
/// use pov_image::geometry::angle_from_sides;
///
/// let right = angle_from_sides(5.0, 3.0, 4.0);
/// assert!((right - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn angle_from_sides(a: f64, b: f64, c: f64) -> f64 {
    let cos_of_angle = (b * b + c * c - a * a) / (2.0 * b * c);
    cos_of_angle.clamp(-1.0, 1.0).acos()
}

/// Shortest distance from `point` to the segment `start`..`end`.
///
/// A segment with `start == end` is treated as a single point. See
/// [`SegmentMode`] for what happens past the endpoints.
///
/// # Examples
/// ```
/// use pov_image::geometry::{point_to_segment_distance, SegmentMode, UNREACHABLE_DISTANCE};
/// use pov_image::CartesianPoint;
///
/// let start = CartesianPoint::new(0.0, 0.0, 0.0);
/// let end = CartesianPoint::new(10.0, 0.0, 0.0);
///
/// let above = CartesianPoint::new(5.0, 2.0, 0.0);
/// assert!((point_to_segment_distance(above, start, end, SegmentMode::Capped) - 2.0).abs() < 1e-9);
///
/// let past_end = CartesianPoint::new(13.0, 4.0, 0.0);
/// assert!((point_to_segment_distance(past_end, start, end, SegmentMode::Capped) - 5.0).abs() < 1e-9);
/// assert_eq!(
///     point_to_segment_distance(past_end, start, end, SegmentMode::Cylinder),
///     UNREACHABLE_DISTANCE
/// );
/// ```
pub fn point_to_segment_distance(
    point: CartesianPoint,
    start: CartesianPoint,
    end: CartesianPoint,
    mode: SegmentMode,
) -> f64 {
    // On the segment, and would divide by zero below
    if point == start || point == end {
        return 0.0;
    }

    if start == end {
        return point_distance(start, point);
    }

    let segment_len = point_distance(start, end);
    let to_start = point_distance(start, point);
    let to_end = point_distance(end, point);

    let angle_start = angle_from_sides(to_end, segment_len, to_start);
    let angle_end = angle_from_sides(to_start, segment_len, to_end);
    let angle_point = PI - angle_start - angle_end;

    let beyond_end = angle_point < FRAC_PI_2 - angle_start;
    let beyond_start = angle_point < FRAC_PI_2 - angle_end;

    match mode {
        SegmentMode::Cylinder if beyond_end || beyond_start => return UNREACHABLE_DISTANCE,
        SegmentMode::Capped if beyond_end => return to_end,
        SegmentMode::Capped if beyond_start => return to_start,
        _ => {}
    }

    // Height of the triangle over the base start-end
    to_start * angle_start.sin()
}

#[cfg(test)]
mod tests;

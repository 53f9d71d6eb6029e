//! Tests for the distance kernel.

use super::*;
use approx::assert_relative_eq;

fn p(x: f64, y: f64, z: f64) -> CartesianPoint {
    CartesianPoint::new(x, y, z)
}

// =============================================================================
// DISTANCE
// =============================================================================

#[test]
fn test_distance_works_in_any_dimension() {
    assert_eq!(distance(&[], &[]).unwrap(), 0.0);
    assert_eq!(distance(&[1.0], &[-2.0]).unwrap(), 3.0);
    assert_relative_eq!(
        distance(&[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 4.0, 5.0]).unwrap(),
        2.0
    );
}

#[test]
fn test_distance_rejects_mismatched_arity() {
    let err = distance(&[0.0, 0.0, 0.0], &[0.0, 0.0]).unwrap_err();
    assert!(matches!(err, PovError::DimensionMismatch { left: 3, right: 2 }));
}

#[test]
fn test_point_distance_agrees_with_slice_form() {
    let a = p(1.0, -2.0, 3.5);
    let b = p(-4.0, 0.5, 9.0);
    assert_relative_eq!(
        point_distance(a, b),
        distance(&a.to_array(), &b.to_array()).unwrap(),
        epsilon = 1e-12
    );
}

// =============================================================================
// LAW OF COSINES
// =============================================================================

#[test]
fn test_equilateral_angles_are_sixty_degrees() {
    assert_relative_eq!(angle_from_sides(2.0, 2.0, 2.0), PI / 3.0, epsilon = 1e-12);
}

#[test]
fn test_clamp_absorbs_overshoot() {
    // Raw cosine is (1 + 1e-20 - 4) / 2e-10, far below -1
    let angle = angle_from_sides(2.0, 1.0, 1e-10);
    assert!(!angle.is_nan());
    assert_relative_eq!(angle, PI);

    // Raw cosine far above 1
    let angle = angle_from_sides(1e-10, 1.0, 3.0);
    assert!(!angle.is_nan());
    assert_eq!(angle, 0.0);
}

#[test]
fn test_angle_always_within_zero_and_pi() {
    let sides = [1e-9, 0.001, 0.5, 1.0, 3.0, 17.4625, 1e6];
    for &a in &sides {
        for &b in &sides {
            for &c in &sides {
                let angle = angle_from_sides(a, b, c);
                assert!(
                    (0.0..=PI).contains(&angle),
                    "angle_from_sides({a}, {b}, {c}) = {angle}"
                );
            }
        }
    }
}

// =============================================================================
// POINT TO SEGMENT
// =============================================================================

#[test]
fn test_endpoints_are_at_distance_zero() {
    let start = p(1.0, 2.0, 3.0);
    let end = p(-7.0, 0.0, 4.0);
    for mode in [SegmentMode::Capped, SegmentMode::Cylinder] {
        assert_eq!(point_to_segment_distance(start, start, end, mode), 0.0);
        assert_eq!(point_to_segment_distance(end, start, end, mode), 0.0);
    }
}

#[test]
fn test_degenerate_segment_is_point_distance() {
    let s = p(3.0, -1.0, 2.0);
    for q in [p(0.0, 0.0, 0.0), p(3.0, -1.0, 7.0), p(-10.0, 4.5, 1.25)] {
        assert_eq!(
            point_to_segment_distance(q, s, s, SegmentMode::Capped),
            point_distance(q, s)
        );
    }
}

#[test]
fn test_perpendicular_foot_inside_segment() {
    let start = p(0.0, 0.0, 0.0);
    let end = p(0.0, 0.0, 10.0);
    let q = p(3.0, 4.0, 6.0);
    assert_relative_eq!(
        point_to_segment_distance(q, start, end, SegmentMode::Capped),
        5.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        point_to_segment_distance(q, start, end, SegmentMode::Cylinder),
        5.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_capped_mode_measures_to_nearest_endpoint() {
    let start = p(0.0, 0.0, 0.0);
    let end = p(10.0, 0.0, 0.0);

    let before = p(-3.0, 4.0, 0.0);
    assert_relative_eq!(
        point_to_segment_distance(before, start, end, SegmentMode::Capped),
        5.0,
        epsilon = 1e-9
    );

    let after = p(16.0, 0.0, 8.0);
    assert_relative_eq!(
        point_to_segment_distance(after, start, end, SegmentMode::Capped),
        10.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_cylinder_mode_excludes_points_past_either_end() {
    let start = p(0.0, 0.0, 0.0);
    let end = p(10.0, 0.0, 0.0);
    assert_eq!(
        point_to_segment_distance(p(-0.5, 1.0, 0.0), start, end, SegmentMode::Cylinder),
        UNREACHABLE_DISTANCE
    );
    assert_eq!(
        point_to_segment_distance(p(10.5, 0.0, 1.0), start, end, SegmentMode::Cylinder),
        UNREACHABLE_DISTANCE
    );
}

#[test]
fn test_collinear_point_inside_segment_is_on_it() {
    let start = p(0.0, 0.0, 0.0);
    let end = p(10.0, 0.0, 0.0);
    let d = point_to_segment_distance(p(4.0, 0.0, 0.0), start, end, SegmentMode::Capped);
    assert_relative_eq!(d, 0.0, epsilon = 1e-9);
}

#[test]
fn test_collinear_point_past_end_measures_along_axis() {
    let start = p(0.0, 0.0, 0.0);
    let end = p(10.0, 0.0, 0.0);
    let d = point_to_segment_distance(p(13.0, 0.0, 0.0), start, end, SegmentMode::Capped);
    assert_relative_eq!(d, 3.0, epsilon = 1e-9);
}

#[test]
fn test_distance_is_symmetric_in_segment_direction() {
    let a = p(1.0, 2.0, 3.0);
    let b = p(9.0, -4.0, 0.5);
    for q in [p(0.0, 0.0, 0.0), p(5.0, 5.0, 5.0), p(20.0, -10.0, 1.0)] {
        assert_relative_eq!(
            point_to_segment_distance(q, a, b, SegmentMode::Capped),
            point_to_segment_distance(q, b, a, SegmentMode::Capped),
            epsilon = 1e-9
        );
    }
}

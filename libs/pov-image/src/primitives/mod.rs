//! # Rasterizers
//!
//! Shapes are drawn by scanning every voxel, converting its address to
//! millimetres and testing membership. Cost is `VOXEL_COUNT` distance
//! evaluations per segment; images are built offline, once, so the scan is
//! not accelerated.
//!
//! All functions here take cartesian millimetre arguments. The [`polar`]
//! submodule has variants taking voxel addresses and pixel lengths.
//!
//! ## Membership
//!
//! | Shape    | Predicate                               |
//! |----------|-----------------------------------------|
//! | line     | `capped distance <= thickness`          |
//! | cylinder | `cylinder distance <= radius`           |
//! | surface  | `\|ax + by + cz - d\| < thickness / 2`  |

pub mod polar;

use crate::colour::Colour;
use crate::coords::{to_cartesian, CartesianPoint};
use crate::geometry::{point_to_segment_distance, SegmentMode};
use crate::grid::VoxelGrid;
use log::debug;

pub use polar::*;

/// Plane `a·x + b·y + c·z = d`, coefficients in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Plane {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Signed residual of `point` in the plane equation.
    pub fn residual(&self, point: CartesianPoint) -> f64 {
        self.a * point.x + self.b * point.y + self.c * point.z - self.d
    }
}

impl From<[f64; 4]> for Plane {
    fn from([a, b, c, d]: [f64; 4]) -> Self {
        Plane::new(a, b, c, d)
    }
}

/// Whether a point sequence returns to its first point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    Open,
    Closed,
}

/// ORs `colour` into every voxel whose position satisfies `inside`.
///
/// Returns the number of voxels matched.
fn paint_where<F>(grid: &mut VoxelGrid, colour: Colour, inside: F) -> usize
where
    F: Fn(CartesianPoint) -> bool,
{
    let mut matched = 0;
    for address in VoxelGrid::addresses() {
        if inside(to_cartesian(address)) {
            grid.or_at(address, colour);
            matched += 1;
        }
    }
    matched
}

/// Draws the segment `start`..`end` with round caps.
///
/// A voxel is lit when its distance to the segment is at most `thickness`
/// millimetres, so `thickness` acts as a radius.
pub fn draw_line(
    grid: &mut VoxelGrid,
    start: CartesianPoint,
    end: CartesianPoint,
    colour: Colour,
    thickness: f64,
) {
    let matched = paint_where(grid, colour, |voxel| {
        point_to_segment_distance(voxel, start, end, SegmentMode::Capped) <= thickness
    });
    debug!("line {start} -> {end}: {matched} voxels");
}

/// Draws the segment `start`..`end` with flat caps.
///
/// Only voxels whose perpendicular foot falls within the segment are lit.
pub fn draw_cylinder(
    grid: &mut VoxelGrid,
    start: CartesianPoint,
    end: CartesianPoint,
    colour: Colour,
    radius: f64,
) {
    let matched = paint_where(grid, colour, |voxel| {
        point_to_segment_distance(voxel, start, end, SegmentMode::Cylinder) <= radius
    });
    debug!("cylinder {start} -> {end}: {matched} voxels");
}

/// Draws a solid ball as a zero-length line.
pub fn draw_sphere(grid: &mut VoxelGrid, center: CartesianPoint, colour: Colour, radius: f64) {
    draw_line(grid, center, center, colour, radius);
}

/// Draws a slab of total width `thickness` around `plane`.
///
/// The bound is strict, unlike [`draw_line`]: a zero thickness draws nothing.
pub fn draw_surface(grid: &mut VoxelGrid, plane: Plane, colour: Colour, thickness: f64) {
    let limit = 0.5 * thickness;
    let matched = paint_where(grid, colour, |voxel| plane.residual(voxel).abs() < limit);
    debug!("surface {plane:?}: {matched} voxels");
}

/// Connects each point to the next; [`Closure::Closed`] also joins the last
/// point back to the first.
pub fn connect_sequence(
    grid: &mut VoxelGrid,
    points: &[CartesianPoint],
    colour: Colour,
    thickness: f64,
    closure: Closure,
) {
    for pair in points.windows(2) {
        draw_line(grid, pair[0], pair[1], colour, thickness);
    }
    if closure == Closure::Closed && points.len() > 1 {
        draw_line(grid, points[points.len() - 1], points[0], colour, thickness);
    }
}

/// Connects every unordered pair of points. Quadratic in `points.len()`.
pub fn connect_all_pairs(
    grid: &mut VoxelGrid,
    points: &[CartesianPoint],
    colour: Colour,
    thickness: f64,
) {
    for (i, &start) in points.iter().enumerate() {
        for &end in &points[i + 1..] {
            draw_line(grid, start, end, colour, thickness);
        }
    }
}

/// Corners of the axis-aligned box spanned by `p0` and `p1`, as
/// `(bottom, top)` loops at `p0.z` and `p1.z`.
pub fn cuboid_corners(
    p0: CartesianPoint,
    p1: CartesianPoint,
) -> ([CartesianPoint; 4], [CartesianPoint; 4]) {
    let face = |z| {
        [
            CartesianPoint::new(p0.x, p0.y, z),
            CartesianPoint::new(p0.x, p1.y, z),
            CartesianPoint::new(p1.x, p1.y, z),
            CartesianPoint::new(p1.x, p0.y, z),
        ]
    };
    (face(p0.z), face(p1.z))
}

/// Draws the twelve edges of the axis-aligned box spanned by `p0` and `p1`.
pub fn draw_cuboid(
    grid: &mut VoxelGrid,
    p0: CartesianPoint,
    p1: CartesianPoint,
    colour: Colour,
    thickness: f64,
) {
    let (bottom, top) = cuboid_corners(p0, p1);

    connect_sequence(grid, &bottom, colour, thickness, Closure::Closed);
    connect_sequence(grid, &top, colour, thickness, Closure::Closed);

    for (b, t) in bottom.into_iter().zip(top) {
        draw_line(grid, b, t, colour, thickness);
    }
}

/// ORs `f(position)` into every voxel.
///
/// # Examples
/// ```
/// use pov_image::primitives::plot_function;
/// use pov_image::{Colour, VoxelGrid};
///
/// let mut grid = VoxelGrid::new();
/// // Light the lower half of the display
/// plot_function(&mut grid, |p| if p.z < 14.0 { Colour::BLUE } else { Colour::BLACK });
/// assert!(grid.lit_count() > 0);
/// ```
pub fn plot_function<F>(grid: &mut VoxelGrid, f: F)
where
    F: Fn(CartesianPoint) -> Colour,
{
    for address in VoxelGrid::addresses() {
        grid.or_at(address, f(to_cartesian(address)));
    }
}

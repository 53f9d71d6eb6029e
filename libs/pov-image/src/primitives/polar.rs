//! Rasterizers taking voxel addresses and pixel lengths.
//!
//! Each function converts its points with [`to_cartesian`] and its lengths
//! with [`px_to_mm`], then delegates to the millimetre version.

use super::{
    connect_all_pairs, connect_sequence, draw_cuboid, draw_cylinder, draw_line, draw_sphere,
    draw_surface, Closure, Plane,
};
use crate::colour::Colour;
use crate::coords::{px_to_mm, to_cartesian, CartesianPoint, PolarCoordinate};
use crate::error::{PovError, PovResult};
use crate::grid::VoxelGrid;
use config::constants::{ANGLE_STEPS, HEIGHT_STEPS};

fn to_cartesian_all(points: &[PolarCoordinate]) -> Vec<CartesianPoint> {
    points.iter().copied().map(to_cartesian).collect()
}

pub fn draw_line_polar(
    grid: &mut VoxelGrid,
    start: PolarCoordinate,
    end: PolarCoordinate,
    colour: Colour,
    thickness: f64,
) {
    draw_line(
        grid,
        to_cartesian(start),
        to_cartesian(end),
        colour,
        px_to_mm(thickness),
    );
}

pub fn draw_cylinder_polar(
    grid: &mut VoxelGrid,
    start: PolarCoordinate,
    end: PolarCoordinate,
    colour: Colour,
    radius: f64,
) {
    draw_cylinder(
        grid,
        to_cartesian(start),
        to_cartesian(end),
        colour,
        px_to_mm(radius),
    );
}

pub fn draw_sphere_polar(
    grid: &mut VoxelGrid,
    center: PolarCoordinate,
    colour: Colour,
    radius: f64,
) {
    draw_sphere(grid, to_cartesian(center), colour, px_to_mm(radius));
}

/// Plane with `d` and `thickness` given in pixels.
///
/// `a`, `b` and `c` only set the orientation and are used unscaled.
pub fn draw_surface_px(grid: &mut VoxelGrid, plane: Plane, colour: Colour, thickness: f64) {
    let plane = Plane {
        d: px_to_mm(plane.d),
        ..plane
    };
    draw_surface(grid, plane, colour, px_to_mm(thickness));
}

pub fn connect_sequence_polar(
    grid: &mut VoxelGrid,
    points: &[PolarCoordinate],
    colour: Colour,
    thickness: f64,
    closure: Closure,
) {
    connect_sequence(
        grid,
        &to_cartesian_all(points),
        colour,
        px_to_mm(thickness),
        closure,
    );
}

pub fn connect_all_pairs_polar(
    grid: &mut VoxelGrid,
    points: &[PolarCoordinate],
    colour: Colour,
    thickness: f64,
) {
    connect_all_pairs(grid, &to_cartesian_all(points), colour, px_to_mm(thickness));
}

/// Box between two voxel positions.
///
/// The box is axis-aligned in millimetre space, not in polar space.
pub fn draw_cuboid_polar(
    grid: &mut VoxelGrid,
    p0: PolarCoordinate,
    p1: PolarCoordinate,
    colour: Colour,
    thickness: f64,
) {
    draw_cuboid(
        grid,
        to_cartesian(p0),
        to_cartesian(p1),
        colour,
        px_to_mm(thickness),
    );
}

/// Draws a string-art "fadenbild": from every `interval`-th angle on the top
/// ring at `radius`, a line to the bottom ring `twist` steps further round.
///
/// `thickness` is in pixels.
pub fn fadenbild(
    grid: &mut VoxelGrid,
    radius: usize,
    interval: usize,
    twist: usize,
    colour: Colour,
    thickness: f64,
) -> PovResult<()> {
    if interval == 0 {
        return Err(PovError::InvalidInterval);
    }
    let radius = radius as i64;
    let bottom = HEIGHT_STEPS as i64 - 1;

    for angle in (0..ANGLE_STEPS).step_by(interval) {
        let twisted = (angle + twist % ANGLE_STEPS) % ANGLE_STEPS;
        let start = PolarCoordinate::new(angle as i64, 0, radius)?;
        let end = PolarCoordinate::new(twisted as i64, bottom, radius)?;
        draw_line_polar(grid, start, end, colour, thickness);
    }
    Ok(())
}

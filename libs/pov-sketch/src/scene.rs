//! JSON scene descriptions.
//!
//! ```json
//! {
//!   "shapes": [
//!     { "shape": "sphere", "frame": "polar", "center": [0, 0, 0], "radius": 2, "colour": "red" },
//!     { "shape": "surface", "plane": [0, 0, 1, 14], "thickness": 1, "colour": 2 }
//!   ]
//! }
//! ```
//!
//! Points are `[x, y, z]` millimetres in the cartesian frame, or
//! `[angle, height, radius]` voxel indices in the polar frame, where lengths
//! are in pixels.

use anyhow::{bail, Context, Result};
use log::debug;
use pov_image::primitives::{self, Closure, Plane};
use pov_image::{CartesianPoint, Colour, PolarCoordinate, VoxelGrid};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub shapes: Vec<ShapeEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    #[default]
    Cartesian,
    Polar,
}

/// A colour by name (`"teal"`) or raw value (`3`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColourValue {
    Raw(Colour),
    Named(String),
}

impl ColourValue {
    fn resolve(&self) -> Result<Colour> {
        match self {
            ColourValue::Raw(colour) => Ok(*colour),
            ColourValue::Named(name) => Ok(name.parse::<Colour>()?),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShapeEntry {
    #[serde(default)]
    pub frame: Frame,
    pub colour: ColourValue,
    #[serde(flatten)]
    pub shape: Shape,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Line {
        start: [f64; 3],
        end: [f64; 3],
        thickness: f64,
    },
    Cylinder {
        start: [f64; 3],
        end: [f64; 3],
        radius: f64,
    },
    Sphere {
        center: [f64; 3],
        radius: f64,
    },
    Surface {
        plane: [f64; 4],
        thickness: f64,
    },
    Sequence {
        points: Vec<[f64; 3]>,
        thickness: f64,
        #[serde(default)]
        closed: bool,
    },
    AllPairs {
        points: Vec<[f64; 3]>,
        thickness: f64,
    },
    Cuboid {
        corner: [f64; 3],
        opposite: [f64; 3],
        thickness: f64,
    },
    Fadenbild {
        radius: usize,
        interval: usize,
        twist: usize,
        thickness: f64,
    },
}

impl Scene {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid scene description")
    }

    /// Rasterizes every shape into a fresh grid.
    pub fn render(&self) -> Result<VoxelGrid> {
        let mut grid = VoxelGrid::new();
        for (i, entry) in self.shapes.iter().enumerate() {
            entry
                .draw(&mut grid)
                .with_context(|| format!("shape #{i}"))?;
        }
        Ok(grid)
    }
}

/// Voxel address from a polar-frame point, which must be integral.
fn polar_point(p: [f64; 3]) -> Result<PolarCoordinate> {
    if p.iter().any(|c| c.fract() != 0.0) {
        bail!("polar point {p:?} must have integer components");
    }
    Ok(PolarCoordinate::new(p[0] as i64, p[1] as i64, p[2] as i64)?)
}

fn polar_points(points: &[[f64; 3]]) -> Result<Vec<PolarCoordinate>> {
    points.iter().copied().map(polar_point).collect()
}

fn cartesian_points(points: &[[f64; 3]]) -> Vec<CartesianPoint> {
    points.iter().copied().map(CartesianPoint::from_array).collect()
}

fn closure(closed: bool) -> Closure {
    if closed {
        Closure::Closed
    } else {
        Closure::Open
    }
}

impl ShapeEntry {
    pub fn draw(&self, grid: &mut VoxelGrid) -> Result<()> {
        let colour = self.colour.resolve()?;
        debug!("drawing {:?} in {:?} frame", self.shape, self.frame);

        match (&self.shape, self.frame) {
            (&Shape::Line { start, end, thickness }, Frame::Cartesian) => primitives::draw_line(
                grid,
                start.into(),
                end.into(),
                colour,
                thickness,
            ),
            (&Shape::Line { start, end, thickness }, Frame::Polar) => {
                primitives::draw_line_polar(
                    grid,
                    polar_point(start)?,
                    polar_point(end)?,
                    colour,
                    thickness,
                )
            }
            (&Shape::Cylinder { start, end, radius }, Frame::Cartesian) => {
                primitives::draw_cylinder(grid, start.into(), end.into(), colour, radius)
            }
            (&Shape::Cylinder { start, end, radius }, Frame::Polar) => {
                primitives::draw_cylinder_polar(
                    grid,
                    polar_point(start)?,
                    polar_point(end)?,
                    colour,
                    radius,
                )
            }
            (&Shape::Sphere { center, radius }, Frame::Cartesian) => {
                primitives::draw_sphere(grid, center.into(), colour, radius)
            }
            (&Shape::Sphere { center, radius }, Frame::Polar) => {
                primitives::draw_sphere_polar(grid, polar_point(center)?, colour, radius)
            }
            (&Shape::Surface { plane, thickness }, Frame::Cartesian) => {
                primitives::draw_surface(grid, Plane::from(plane), colour, thickness)
            }
            (&Shape::Surface { plane, thickness }, Frame::Polar) => {
                primitives::draw_surface_px(grid, Plane::from(plane), colour, thickness)
            }
            (Shape::Sequence { points, thickness, closed }, Frame::Cartesian) => {
                primitives::connect_sequence(
                    grid,
                    &cartesian_points(points),
                    colour,
                    *thickness,
                    closure(*closed),
                )
            }
            (Shape::Sequence { points, thickness, closed }, Frame::Polar) => {
                primitives::connect_sequence_polar(
                    grid,
                    &polar_points(points)?,
                    colour,
                    *thickness,
                    closure(*closed),
                )
            }
            (Shape::AllPairs { points, thickness }, Frame::Cartesian) => {
                primitives::connect_all_pairs(grid, &cartesian_points(points), colour, *thickness)
            }
            (Shape::AllPairs { points, thickness }, Frame::Polar) => {
                primitives::connect_all_pairs_polar(
                    grid,
                    &polar_points(points)?,
                    colour,
                    *thickness,
                )
            }
            (&Shape::Cuboid { corner, opposite, thickness }, Frame::Cartesian) => {
                primitives::draw_cuboid(grid, corner.into(), opposite.into(), colour, thickness)
            }
            (&Shape::Cuboid { corner, opposite, thickness }, Frame::Polar) => {
                primitives::draw_cuboid_polar(
                    grid,
                    polar_point(corner)?,
                    polar_point(opposite)?,
                    colour,
                    thickness,
                )
            }
            // Always addressed by ring index
            (&Shape::Fadenbild { radius, interval, twist, thickness }, _) => {
                primitives::fadenbild(grid, radius, interval, twist, colour, thickness)?
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_named_and_raw_colours() {
        let scene = Scene::from_json(
            r#"{ "shapes": [
                { "shape": "sphere", "center": [0, 0, 10], "radius": 5, "colour": "teal" },
                { "shape": "sphere", "center": [0, 0, 10], "radius": 5, "colour": 4 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(scene.shapes[0].colour.resolve().unwrap(), Colour::TEAL);
        assert_eq!(scene.shapes[1].colour.resolve().unwrap(), Colour::RED);
        assert_eq!(scene.shapes[0].frame, Frame::Cartesian);
    }

    #[test]
    fn test_rejects_unknown_colour() {
        let scene = Scene::from_json(
            r#"{ "shapes": [ { "shape": "sphere", "center": [0, 0, 0], "radius": 1, "colour": "mauve" } ] }"#,
        )
        .unwrap();
        let err = scene.render().unwrap_err();
        assert!(format!("{err:#}").contains("mauve"));
    }

    #[test]
    fn test_renders_polar_sphere() {
        let scene = Scene::from_json(
            r#"{ "shapes": [
                { "shape": "sphere", "frame": "polar", "center": [20, 4, 8], "radius": 0, "colour": "green" }
            ] }"#,
        )
        .unwrap();
        let grid = scene.render().unwrap();
        assert_eq!(grid.lit_count(), 1);
        assert_eq!(
            grid.get(PolarCoordinate::new(20, 4, 8).unwrap()),
            Colour::GREEN
        );
    }

    #[test]
    fn test_polar_points_must_be_integral_and_in_bounds() {
        assert!(polar_point([1.5, 0.0, 0.0]).is_err());
        assert!(polar_point([0.0, 10.0, 0.0]).is_err());
        assert_eq!(
            polar_point([99.0, 9.0, 15.0]).unwrap(),
            PolarCoordinate::new(99, 9, 15).unwrap()
        );
    }

    #[test]
    fn test_sequence_defaults_to_open() {
        let scene = Scene::from_json(
            r#"{ "shapes": [
                { "shape": "sequence", "frame": "polar", "points": [[0,0,0],[10,0,0]], "thickness": 0.5, "colour": "white" }
            ] }"#,
        )
        .unwrap();
        assert!(matches!(
            scene.shapes[0].shape,
            Shape::Sequence { closed: false, .. }
        ));
        assert!(scene.render().unwrap().lit_count() > 0);
    }

    #[test]
    fn test_fadenbild_errors_carry_shape_index() {
        let scene = Scene::from_json(
            r#"{ "shapes": [
                { "shape": "fadenbild", "radius": 15, "interval": 0, "twist": 10, "thickness": 1, "colour": "blue" }
            ] }"#,
        )
        .unwrap();
        let err = scene.render().unwrap_err();
        assert!(format!("{err:#}").contains("shape #0"));
    }

    #[test]
    fn test_bundled_demo_scene_renders() {
        let scene = Scene::from_json(include_str!("../scenes/demo.json")).unwrap();
        assert_eq!(scene.shapes.len(), 5);
        let grid = scene.render().unwrap();
        assert!(grid.lit_count() > 0);
    }

    #[test]
    fn test_rejects_unknown_shape() {
        let result = Scene::from_json(
            r#"{ "shapes": [ { "shape": "torus", "colour": "red" } ] }"#,
        );
        assert!(result.is_err());
    }
}

//! # POV Image
//!
//! Builds images for a cylindrical persistence-of-vision LED display and
//! encodes them as the byte array literal its firmware is compiled with.
//!
//! ## Architecture
//!
//! ```text
//! PolarCoordinate ──coords──▶ CartesianPoint (mm)
//!                                   │
//!                 geometry (point/segment distance)
//!                                   │
//! VoxelGrid ◀──primitives (scan + OR)┘
//!     │
//! encoder ──▶ `const byte image[100][10][16] = {...}` ──sketch──▶ name/name.ino
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pov_image::primitives::{draw_line_polar, draw_sphere_polar};
//! use pov_image::{encoder, Colour, PolarCoordinate, VoxelGrid};
//!
//! let mut grid = VoxelGrid::new();
//! let a = PolarCoordinate::new(0, 0, 15)?;
//! let b = PolarCoordinate::new(50, 9, 15)?;
//! draw_line_polar(&mut grid, a, b, Colour::RED, 1.0);
//! draw_sphere_polar(&mut grid, a, Colour::BLUE, 2.0);
//!
//! let literal = encoder::serialize_volume(&grid)?;
//! assert!(literal.starts_with("const byte image[100][10][16]"));
//! # Ok::<(), pov_image::PovError>(())
//! ```

pub mod colour;
pub mod coords;
pub mod encoder;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod primitives;
pub mod sketch;

pub use colour::Colour;
pub use coords::{px_to_mm, to_cartesian, CartesianPoint, PolarCoordinate};
pub use error::{PovError, PovResult};
pub use grid::VoxelGrid;

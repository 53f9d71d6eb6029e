//! # Config Crate
//!
//! Centralized constants for the POV display image pipeline.
//! The physical layout of the display and the byte layout expected by the
//! controller firmware are defined here so that every crate agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ANGLE_STEPS, HEIGHT_STEPS, RADIUS_STEPS, VOXEL_COUNT};
//!
//! assert_eq!(ANGLE_STEPS * HEIGHT_STEPS * RADIUS_STEPS, VOXEL_COUNT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Firmware Compatible**: Encoding constants match the controller's array
//!   declaration
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

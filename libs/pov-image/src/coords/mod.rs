//! Conversion between polar voxel addresses and physical coordinates.
//!
//! Polar addresses are indices into the LED array: angle `0..100`, height
//! `0..10` and radius `0..16`. Cartesian points are millimetres with the
//! rotation axis on `z` and the base of the display at `z = 0`.

use crate::error::{PovError, PovResult};
use config::constants::{
    ANGLE_STEPS, DEGREES_PER_ANGLE_STEP, HEIGHT_STEPS, INNER_RING_RADIUS_MM, MM_PER_PIXEL,
    RADIUS_STEPS,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Millimetre position in display space.
pub use glam::DVec3 as CartesianPoint;

/// Address of a single voxel.
///
/// # Examples
/// ```
/// use pov_image::PolarCoordinate;
///
/// let p = PolarCoordinate::new(99, 9, 15).unwrap();
/// assert_eq!(p.angle(), 99);
/// assert!(PolarCoordinate::new(100, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i64; 3]", into = "[i64; 3]")]
pub struct PolarCoordinate {
    angle: u8,
    height: u8,
    radius: u8,
}

impl PolarCoordinate {
    /// Creates an address, validating each component against the grid.
    pub fn new(angle: i64, height: i64, radius: i64) -> PovResult<Self> {
        Ok(Self {
            angle: check_axis("angle", angle, ANGLE_STEPS)?,
            height: check_axis("height", height, HEIGHT_STEPS)?,
            radius: check_axis("radius", radius, RADIUS_STEPS)?,
        })
    }

    /// Builds an address from indices already known to be in range.
    pub(crate) fn from_indices(angle: usize, height: usize, radius: usize) -> Self {
        debug_assert!(angle < ANGLE_STEPS && height < HEIGHT_STEPS && radius < RADIUS_STEPS);
        Self {
            angle: angle as u8,
            height: height as u8,
            radius: radius as u8,
        }
    }

    /// Uniformly random address anywhere in the grid.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_indices(
            rng.gen_range(0..ANGLE_STEPS),
            rng.gen_range(0..HEIGHT_STEPS),
            rng.gen_range(0..RADIUS_STEPS),
        )
    }

    pub fn angle(self) -> usize {
        self.angle as usize
    }

    pub fn height(self) -> usize {
        self.height as usize
    }

    pub fn radius(self) -> usize {
        self.radius as usize
    }

    /// Physical position of this voxel. See [`to_cartesian`].
    pub fn to_cartesian(self) -> CartesianPoint {
        to_cartesian(self)
    }
}

fn check_axis(axis: &'static str, value: i64, steps: usize) -> PovResult<u8> {
    if value < 0 || value >= steps as i64 {
        return Err(PovError::AddressOutOfBounds {
            axis,
            value,
            max: steps - 1,
        });
    }
    Ok(value as u8)
}

impl TryFrom<[i64; 3]> for PolarCoordinate {
    type Error = PovError;

    fn try_from([angle, height, radius]: [i64; 3]) -> PovResult<Self> {
        PolarCoordinate::new(angle, height, radius)
    }
}

impl From<PolarCoordinate> for [i64; 3] {
    fn from(p: PolarCoordinate) -> [i64; 3] {
        [p.angle as i64, p.height as i64, p.radius as i64]
    }
}

/// Converts a polar address to millimetres.
///
/// Angle advances 3.6° per step. The radius is measured from the innermost
/// LED ring outward. Height index 9 sits at the base, so `z` grows as the
/// index falls.
///
/// # Examples
/// ```
/// use pov_image::{to_cartesian, PolarCoordinate};
///
/// let p = to_cartesian(PolarCoordinate::new(0, 9, 0).unwrap());
/// assert_eq!(p.z, 0.0);
/// assert_eq!(p.x, 17.4625);
/// ```
pub fn to_cartesian(polar: PolarCoordinate) -> CartesianPoint {
    let radius_mm = INNER_RING_RADIUS_MM + px_to_mm(polar.radius() as f64);
    let angle_rad = (polar.angle() as f64 * DEGREES_PER_ANGLE_STEP).to_radians();
    let height_mm = px_to_mm((HEIGHT_STEPS - 1 - polar.height()) as f64);

    CartesianPoint::new(
        angle_rad.cos() * radius_mm,
        angle_rad.sin() * radius_mm,
        height_mm,
    )
}

/// Converts a length in LED pitches to millimetres.
///
/// # Examples
/// ```
/// use pov_image::px_to_mm;
/// assert_eq!(px_to_mm(2.0), 6.35);
/// ```
#[inline]
pub fn px_to_mm(px: f64) -> f64 {
    px * MM_PER_PIXEL
}

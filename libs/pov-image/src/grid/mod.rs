//! Dense voxel volume for one image.
//!
//! Voxels are stored angle-major, then height, then radius, which is also the
//! order the encoder emits them in. One `(angle, height)` pair owns a
//! contiguous run of [`RADIUS_STEPS`] voxels, so a row is a plain slice.

use crate::colour::Colour;
use crate::coords::PolarCoordinate;
use config::constants::{ANGLE_STEPS, HEIGHT_STEPS, RADIUS_STEPS, VOXEL_COUNT};

/// One radial line of voxels.
pub type Row = [Colour];

/// The full `100 x 10 x 16` image.
///
/// Draw operations take `&mut VoxelGrid`; the only way to change a voxel is
/// [`VoxelGrid::or_at`].
///
/// # Examples
/// ```
/// use pov_image::{Colour, PolarCoordinate, VoxelGrid};
///
/// let mut grid = VoxelGrid::new();
/// let p = PolarCoordinate::new(3, 4, 5).unwrap();
/// grid.or_at(p, Colour::RED);
/// grid.or_at(p, Colour::BLUE);
/// assert_eq!(grid.get(p), Colour::PINK);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    voxels: Vec<Colour>,
}

impl VoxelGrid {
    /// Creates an all-black grid.
    pub fn new() -> Self {
        Self {
            voxels: vec![Colour::BLACK; VOXEL_COUNT],
        }
    }

    /// ORs `colour` into the voxel at `address`.
    #[inline]
    pub fn or_at(&mut self, address: PolarCoordinate, colour: Colour) {
        self.voxels[index_of(address)] |= colour;
    }

    #[inline]
    pub fn get(&self, address: PolarCoordinate) -> Colour {
        self.voxels[index_of(address)]
    }

    /// Every address in storage order: angle-major, then height, then radius.
    pub fn addresses() -> impl Iterator<Item = PolarCoordinate> {
        (0..ANGLE_STEPS).flat_map(|angle| {
            (0..HEIGHT_STEPS).flat_map(move |height| {
                (0..RADIUS_STEPS)
                    .map(move |radius| PolarCoordinate::from_indices(angle, height, radius))
            })
        })
    }

    /// Addresses paired with their current colour, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (PolarCoordinate, Colour)> + '_ {
        Self::addresses().zip(self.voxels.iter().copied())
    }

    /// The 16 voxels at one angle and height, innermost first.
    pub fn row(&self, angle: usize, height: usize) -> &Row {
        let start = index_of(PolarCoordinate::from_indices(angle, height, 0));
        &self.voxels[start..start + RADIUS_STEPS]
    }

    /// Rows of one angular slice, top row first.
    pub fn slice(&self, angle: usize) -> impl Iterator<Item = &Row> + '_ {
        let start = angle * HEIGHT_STEPS * RADIUS_STEPS;
        self.voxels[start..start + HEIGHT_STEPS * RADIUS_STEPS].chunks_exact(RADIUS_STEPS)
    }

    /// Number of voxels with at least one channel lit.
    pub fn lit_count(&self) -> usize {
        self.voxels.iter().filter(|c| !c.is_black()).count()
    }
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn index_of(address: PolarCoordinate) -> usize {
    (address.angle() * HEIGHT_STEPS + address.height()) * RADIUS_STEPS + address.radius()
}

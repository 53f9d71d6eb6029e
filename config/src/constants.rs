//! # Configuration Constants
//!
//! Centralized constants for the POV image pipeline. Grid dimensions, the
//! physical scale of the LED array and the encoded array layout are defined
//! here.
//!
//! ## Categories
//!
//! - **Grid**: Addressable polar grid dimensions
//! - **Physical**: Millimetre scale of the LED array
//! - **Encoding**: Bit and byte widths of the packed image
//! - **Output**: Program preamble and sketch naming
//! - **Precision**: Floating-point comparison tolerance

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Number of angular steps in one revolution.
///
/// # Example
///
/// ```rust
/// use config::constants::{ANGLE_STEPS, DEGREES_PER_ANGLE_STEP};
///
/// assert_eq!(ANGLE_STEPS as f64 * DEGREES_PER_ANGLE_STEP, 360.0);
/// ```
pub const ANGLE_STEPS: usize = 100;

/// Number of LED rows stacked along the rotation axis.
pub const HEIGHT_STEPS: usize = 10;

/// Number of LEDs along one radius.
///
/// One row of the image is one radius worth of voxels.
pub const RADIUS_STEPS: usize = 16;

/// Total number of addressable voxels.
///
/// # Example
///
/// ```rust
/// use config::constants::VOXEL_COUNT;
///
/// assert_eq!(VOXEL_COUNT, 16_000);
/// ```
pub const VOXEL_COUNT: usize = ANGLE_STEPS * HEIGHT_STEPS * RADIUS_STEPS;

// =============================================================================
// PHYSICAL CONSTANTS
// =============================================================================

/// Rotation covered by one angular step, in degrees.
pub const DEGREES_PER_ANGLE_STEP: f64 = 3.6;

/// Distance between two neighbouring LEDs (125 mil), in millimetres.
///
/// LEDs are not perfectly evenly spaced, so this is an approximation.
///
/// # Example
///
/// ```rust
/// use config::constants::MM_PER_PIXEL;
///
/// let thickness_px = 2.0;
/// assert_eq!(thickness_px * MM_PER_PIXEL, 6.35);
/// ```
pub const MM_PER_PIXEL: f64 = 3.175;

/// Distance from the rotation axis to the innermost LED, in millimetres.
pub const INNER_RING_RADIUS_MM: f64 = 17.4625;

// =============================================================================
// ENCODING CONSTANTS
// =============================================================================

/// Bits stored per voxel (one per colour channel).
pub const BITS_PER_VOXEL: usize = 3;

/// Largest colour value that fits in [`BITS_PER_VOXEL`] bits.
pub const MAX_COLOUR_VALUE: u8 = (1 << BITS_PER_VOXEL) - 1;

/// Bits in one packed image row.
///
/// # Example
///
/// ```rust
/// use config::constants::{BITS_PER_ROW, BYTES_PER_ROW};
///
/// assert_eq!(BITS_PER_ROW, BYTES_PER_ROW * 8);
/// ```
pub const BITS_PER_ROW: usize = RADIUS_STEPS * BITS_PER_VOXEL;

/// Bytes in one packed image row.
pub const BYTES_PER_ROW: usize = BITS_PER_ROW / 8;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Preprocessor lines written before the image array.
///
/// The program template must not include this header itself.
pub const PROGRAM_PREAMBLE: &str = "#include <SPI.h>\n\n";

/// Declaration opening the image array literal.
///
/// The declared dimensions are the ones the firmware indexes with and are
/// emitted verbatim.
pub const IMAGE_DECLARATION: &str = "const byte image[100][10][16] = {\n";

/// File extension of a sketch.
pub const SKETCH_EXTENSION: &str = ".ino";

/// Template used when none is given on the command line.
pub const DEFAULT_TEMPLATE_PATH: &str = "template.cpp";

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

//! # Encoder
//!
//! Packs a [`VoxelGrid`] into the C array literal the display firmware is
//! compiled with.
//!
//! ## Row layout
//!
//! Sixteen 3-bit voxels are concatenated, innermost voxel first, into 48
//! bits and emitted as six binary byte literals:
//!
//! ```text
//! voxel:  0   1   2   3   4   5   6   7   8 ...  15
//! bits:  rgb rgb rgb rgb rgb rgb rgb rgb rgb ... rgb
//! bytes: [  byte 0  ][  byte 1  ][  byte 2  ] ... [ byte 5 ]
//! ```
//!
//! ## Literal layout
//!
//! ```text
//! const byte image[100][10][16] = {
//! \t// 00
//! \t{
//! \t\t{0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000},
//! ...
//! \t},
//!
//! \t// 01
//! ...
//! \t}
//! };
//! ```

use crate::colour::Colour;
use crate::error::{PovError, PovResult};
use crate::grid::{Row, VoxelGrid};
use config::constants::{
    ANGLE_STEPS, BITS_PER_ROW, BITS_PER_VOXEL, BYTES_PER_ROW, IMAGE_DECLARATION,
    MAX_COLOUR_VALUE, PROGRAM_PREAMBLE, RADIUS_STEPS,
};

/// Fixed-width binary digits of a raw voxel value.
///
/// # Examples
/// ```
/// use pov_image::encoder::colour_bits;
///
/// assert_eq!(colour_bits(7).unwrap(), "111");
/// assert_eq!(colour_bits(2).unwrap(), "010");
/// assert!(colour_bits(8).is_err());
/// ```
pub fn colour_bits(value: u8) -> PovResult<String> {
    if value > MAX_COLOUR_VALUE {
        return Err(PovError::ColourOutOfRange(value));
    }
    Ok(format!("{:0width$b}", value, width = BITS_PER_VOXEL))
}

/// Packs one row into bytes, first voxel in the most significant bits.
pub fn pack_row(row: &Row) -> PovResult<[u8; BYTES_PER_ROW]> {
    let bits = row.len() * BITS_PER_VOXEL;
    if bits != BITS_PER_ROW {
        return Err(PovError::RowBitLength {
            bits,
            expected: BITS_PER_ROW,
        });
    }

    let packed = row.iter().fold(0u64, |acc, colour| {
        (acc << BITS_PER_VOXEL) | u64::from(colour.value())
    });

    let mut bytes = [0u8; BYTES_PER_ROW];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let shift = BITS_PER_ROW - 8 * (i + 1);
        *byte = (packed >> shift) as u8;
    }
    Ok(bytes)
}

/// Splits six packed bytes back into sixteen colours.
///
/// # Examples
/// ```
/// use pov_image::encoder::unpack_row;
/// use pov_image::Colour;
///
/// let row = unpack_row([0b10000000, 0, 0, 0, 0, 0b00000111]);
/// assert_eq!(row[0], Colour::RED);
/// assert_eq!(row[15], Colour::WHITE);
/// ```
pub fn unpack_row(bytes: [u8; BYTES_PER_ROW]) -> [Colour; RADIUS_STEPS] {
    let packed = bytes
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));

    let mut row = [Colour::BLACK; RADIUS_STEPS];
    for (i, colour) in row.iter_mut().enumerate() {
        let shift = BITS_PER_ROW - BITS_PER_VOXEL * (i + 1);
        *colour = Colour::from_masked((packed >> shift) as u8);
    }
    row
}

/// One row as `\t\t{0b........, ...}`.
pub fn serialize_row(row: &Row) -> PovResult<String> {
    let literals: Vec<String> = pack_row(row)?
        .iter()
        .map(|byte| format!("0b{byte:08b}"))
        .collect();
    Ok(format!("\t\t{{{}}}", literals.join(", ")))
}

/// One angular slice, preceded by its index comment.
///
/// Every slice but the last ends with a comma and newline.
pub fn serialize_slice<'a, I>(rows: I, index: usize) -> PovResult<String>
where
    I: IntoIterator<Item = &'a Row>,
{
    let rows = rows
        .into_iter()
        .map(serialize_row)
        .collect::<PovResult<Vec<_>>>()?;

    let mut out = format!("\t// {index:02}\n\t{{\n");
    out.push_str(&rows.join(",\n"));
    out.push_str("\n\t}");
    if index != ANGLE_STEPS - 1 {
        out.push_str(",\n");
    }
    Ok(out)
}

/// The complete `const byte image[...]` literal for `grid`.
pub fn serialize_volume(grid: &VoxelGrid) -> PovResult<String> {
    let slices = (0..ANGLE_STEPS)
        .map(|angle| serialize_slice(grid.slice(angle), angle))
        .collect::<PovResult<Vec<_>>>()?;

    let mut out = String::from(IMAGE_DECLARATION);
    out.push_str(&slices.join("\n"));
    out.push_str("\n};\n\n");
    Ok(out)
}

/// Preamble, image literal and the program template, concatenated.
///
/// `template` is appended verbatim. It must not declare `image` or include
/// `<SPI.h>` itself.
pub fn assemble_program(volume_literal: &str, template: &str) -> String {
    let mut program =
        String::with_capacity(PROGRAM_PREAMBLE.len() + volume_literal.len() + template.len());
    program.push_str(PROGRAM_PREAMBLE);
    program.push_str(volume_literal);
    program.push_str(template);
    program
}

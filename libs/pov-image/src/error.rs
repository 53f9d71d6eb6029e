//! # Error Types
//!
//! Error types for image building and encoding. Geometry never fails for
//! degenerate input; the variants here are caller bugs, encoder shape
//! violations, and output collisions.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building, encoding or writing an image.
///
/// ## Example
///
/// ```rust
/// use pov_image::{Colour, PovError};
///
/// match Colour::new(9) {
///     Err(PovError::ColourOutOfRange(value)) => assert_eq!(value, 9),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum PovError {
    /// Distance requested between points of different arity.
    #[error("Point A is {left}-dimensional but point B is {right}-dimensional")]
    DimensionMismatch {
        /// Arity of the first point
        left: usize,
        /// Arity of the second point
        right: usize,
    },

    /// Colour value does not fit in three bits.
    #[error("Colour {0} out of range: only the last 3 bits may be set")]
    ColourOutOfRange(u8),

    /// Colour name not in the named palette.
    #[error("Unknown colour name: {0}")]
    UnknownColour(String),

    /// Polar address component outside the grid.
    #[error("{axis} {value} out of range (max: {max})")]
    AddressOutOfBounds {
        /// Name of the offending axis
        axis: &'static str,
        /// Supplied value
        value: i64,
        /// Largest valid value on that axis
        max: usize,
    },

    /// Packed row does not have the expected number of bits.
    #[error("Row is {bits} bits long, should be {expected}")]
    RowBitLength {
        /// Bits produced by the row
        bits: usize,
        /// Bits required by the array layout
        expected: usize,
    },

    /// Fadenbild interval of zero would never advance.
    #[error("Fadenbild interval must be at least 1")]
    InvalidInterval,

    /// Sketch directory is already present.
    #[error("Directory {} already exists. Delete it or choose another name.", .0.display())]
    DestinationExists(PathBuf),

    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for image operations.
pub type PovResult<T> = Result<T, PovError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = PovError::DimensionMismatch { left: 3, right: 2 };
        assert!(err.to_string().contains("3-dimensional"));
        assert!(err.to_string().contains("2-dimensional"));

        let err = PovError::RowBitLength {
            bits: 45,
            expected: 48,
        };
        assert_eq!(err.to_string(), "Row is 45 bits long, should be 48");

        let err = PovError::DestinationExists(PathBuf::from("heart"));
        assert!(err.to_string().contains("heart"));
        assert!(err.to_string().contains("choose another name"));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PovError>();
    }
}

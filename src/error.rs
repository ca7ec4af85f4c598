//! Error types for the driver
//!
//! This module defines error types for geometry validation ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Invalid geometry passed to [`Dimensions::new`](crate::config::Dimensions::new)
//! - [`Error`] - Runtime errors during display operations
//!
//! Transport errors are never retried. A failed write can leave the
//! controller halfway through a nibble pair, and only a new
//! [`begin`](crate::display::Lcd::begin) resynchronizes it.
//!
//! ## Example
//!
//! ```
//! use hd44780_pcf8574::{BuilderError, Dimensions};
//!
//! let result = Dimensions::new(16, 5);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { cols: 16, rows: 5 })));
//! ```

use crate::interface::ExpanderInterface;

/// Maximum number of rows supported by the row offset table
pub const MAX_ROWS: u8 = 4;

/// Maximum number of columns
///
/// The HD44780 holds 40 characters per line in 2-line mode.
pub const MAX_COLS: u8 = 40;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: ExpanderInterface> {
    /// Bus transaction failed
    ///
    /// Wraps the error from the [`ExpanderInterface`] implementation.
    Interface(I::Error),
    /// An operation was called before [`begin`](crate::display::Lcd::begin) completed
    NotInitialized,
    /// Custom character slot outside 0..=7
    InvalidCharacterSlot {
        /// Requested slot
        slot: u8,
    },
}

impl<I: ExpanderInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::NotInitialized => write!(f, "Display not initialized, call begin() first"),
            Self::InvalidCharacterSlot { slot } => {
                write!(f, "Invalid custom character slot {slot} (expected 0..=7)")
            }
        }
    }
}

impl<I: ExpanderInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of columns requested
        cols: u8,
        /// Number of rows requested
        rows: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { cols, rows } => write!(
                f,
                "Invalid dimensions {cols}x{rows} (max {MAX_COLS}x{MAX_ROWS}, both non-zero)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

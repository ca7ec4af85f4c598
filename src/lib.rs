//! HD44780 Character LCD Driver over PCF8574
//!
//! A driver for HD44780-compatible character LCDs connected through a PCF8574
//! I2C I/O expander backpack (the common "I2C LCD" module).
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - 1 to 4 line panels, up to 40 columns
//! - Cursor, blink, scrolling and text direction control
//! - Custom characters (8 CGRAM slots)
//! - `core::fmt::Write` support, plus `ufmt` with the `ufmt` feature
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use core::fmt::Write;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{I2c, Operation};
//! use hd44780_pcf8574::{Dimensions, FontSize, I2cInterface, Lcd};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let delay = MockDelay;
//! let interface = I2cInterface::new(i2c, 0x27);
//! let dims = match Dimensions::new(20, 4) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//!
//! let mut lcd = Lcd::new(interface, delay);
//! let _ = lcd.begin(dims, FontSize::Dots5x8);
//! let _ = lcd.backlight_on();
//! let _ = lcd.set_cursor(2, 1);
//! let _ = write!(lcd, "T = {} C", 21);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// HD44780 instruction definitions
pub mod command;
/// Display geometry and font configuration
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// PCF8574 pin layout and byte encoding
pub mod expander;
/// Hardware interface abstraction
pub mod interface;
/// Controller flag registers
pub mod state;
/// Data sheet timing constants
pub mod timing;

pub use config::{Dimensions, FontSize, MAX_COLS, MAX_ROWS};
pub use display::{BACKLIGHT_FULL, Lcd};
pub use error::{BuilderError, Error};
pub use interface::{DEFAULT_ADDRESS, ExpanderInterface, I2cInterface};
pub use state::{DisplayControl, EntryMode};

//! Hardware interface abstraction
//!
//! This module provides the [`ExpanderInterface`] trait and the [`I2cInterface`]
//! struct for driving the PCF8574 output pins over I2C.
//!
//! ## Hardware Requirements
//!
//! - I2C bus (SDA + SCL) implementing [`embedded_hal::i2c::I2c`]
//! - A PCF8574 or PCF8574A backpack wired with the data nibble on P4-P7 and
//!   RS/RW/E/backlight on P0-P3 (see [`crate::expander`])
//!
//! The driver only ever writes to the expander. It never reads pins back and
//! never polls the controller busy flag.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation};
//! use hd44780_pcf8574::{ExpanderInterface, I2cInterface};
//! # use core::convert::Infallible;
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
//! // Backpack at the usual PCF8574 address
//! let mut interface = I2cInterface::new(MockI2c, 0x27);
//!
//! // Drive all pins low except the backlight
//! let _ = interface.write_pins(0x08);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit address of a PCF8574 with A0-A2 pulled high
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Trait for the transport that sets the expander output pins
///
/// This trait abstracts over different bus implementations, allowing the
/// [`Lcd`](crate::display::Lcd) to work with any transport that can latch one
/// byte onto the expander pins.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`]. Implement this trait on
/// your own type to target a different expander, a shared bus wrapper, or a
/// test double.
pub trait ExpanderInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Latch one byte onto the expander output pins
    ///
    /// The implementation must perform exactly one complete bus transaction:
    /// start, device address, the byte, stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails (no acknowledge, arbitration
    /// loss, bus fault). The error is passed through unchanged.
    #[allow(clippy::type_complexity)]
    fn write_pins(&mut self, pins: u8) -> InterfaceResult<(), Self::Error>;
}

/// I2C implementation of [`ExpanderInterface`] for the PCF8574
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`] with 7-bit addressing
///
/// ## Example
///
/// ```rust,no_run
/// use hd44780_pcf8574::{I2cInterface, Lcd};
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # use embedded_hal::i2c::{I2c, Operation};
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// let interface = I2cInterface::new(MockI2c, 0x3F);
/// assert_eq!(interface.address(), 0x3F);
///
/// // Use with Lcd
/// let _lcd = Lcd::new(interface, MockDelay);
/// ```
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface for the expander at `address`
    ///
    /// The address is a 7-bit address (0x20-0x27 for PCF8574, 0x38-0x3F
    /// for PCF8574A). It cannot be changed afterwards.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Create a new interface at [`DEFAULT_ADDRESS`]
    pub fn with_default_address(i2c: I2C) -> Self {
        Self::new(i2c, DEFAULT_ADDRESS)
    }

    /// Get the device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> ExpanderInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_pins(&mut self, pins: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(self.address, &[pins])
    }
}

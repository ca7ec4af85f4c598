//! PCF8574 pin layout
//!
//! The PCF8574 drives eight quasi-bidirectional pins from a single byte. On the
//! common LCD backpack they are wired as follows:
//!
//! | Pin | Bit  | Signal                     |
//! |-----|------|----------------------------|
//! | P0  | 0x01 | RS (register select)       |
//! | P1  | 0x02 | RW (always low, write only)|
//! | P2  | 0x04 | E (enable strobe)          |
//! | P3  | 0x08 | Backlight transistor       |
//! | P4-7| 0xF0 | D4-D7 (4-bit data nibble)  |
//!
//! Every bus write sets all eight pins at once, so the backlight bit has to be
//! carried in every byte or the backlight would flicker off.
//!
//! ## Example
//!
//! ```
//! use hd44780_pcf8574::expander::{PinState, encode};
//!
//! let pins = PinState { nibble: 0xA, is_data: true, enable: true, backlight: true };
//! assert_eq!(encode(pins), 0xAD);
//! ```

/// Register select pin mask (high = display data, low = instruction)
pub const PIN_RS: u8 = 0x01;

/// Read/write pin mask
///
/// Never asserted: the driver does not read the busy flag.
pub const PIN_RW: u8 = 0x02;

/// Enable strobe pin mask
pub const PIN_EN: u8 = 0x04;

/// Backlight pin mask
pub const PIN_BACKLIGHT: u8 = 0x08;

/// Bit offset of the data nibble
pub const DATA_SHIFT: u8 = 4;

/// Logical state of the expander pins for one bus write
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinState {
    /// 4-bit value for D4-D7 (upper bits are ignored)
    pub nibble: u8,
    /// Register select: `true` for display data, `false` for an instruction
    pub is_data: bool,
    /// Enable strobe level
    pub enable: bool,
    /// Backlight output level
    pub backlight: bool,
}

/// Encode a pin state into the byte written to the expander
///
/// The RW bit is always left low.
pub fn encode(pins: PinState) -> u8 {
    let mut byte = (pins.nibble & 0x0F) << DATA_SHIFT;
    if pins.is_data {
        byte |= PIN_RS;
    }
    if pins.enable {
        byte |= PIN_EN;
    }
    if pins.backlight {
        byte |= PIN_BACKLIGHT;
    }
    byte
}

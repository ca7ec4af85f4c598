//! HD44780 instruction definitions
//!
//! This module defines the instruction bytes and flag bits used to control the
//! HD44780 character LCD controller. Every instruction is a single byte made of
//! an opcode (the highest set bit) OR-ed with flag bits that live below it.
//!
//! In 4-bit mode each instruction byte travels as two nibbles, high nibble
//! first, with the register-select line low. Character and CGRAM bitmap bytes
//! use the same framing with register-select high.
//!
//! ## Example
//!
//! ```
//! use hd44780_pcf8574::command;
//!
//! // Display on, cursor visible, no blink
//! let byte = command::DISPLAY_CONTROL | command::DISPLAY_ON | command::CURSOR_ON;
//! assert_eq!(byte, 0x0E);
//!
//! // Move the cursor to DDRAM address 0x40 (start of the second line)
//! assert_eq!(command::SET_DDRAM_ADDR | 0x40, 0xC0);
//! ```

// Instructions

/// Clear display instruction (0x01)
///
/// Fills DDRAM with spaces and returns the cursor to address 0.
/// Needs [`CLEAR_DELAY_US`](crate::timing::CLEAR_DELAY_US) to complete.
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Return home instruction (0x02)
///
/// Returns the cursor to address 0 and undoes any display shift. DDRAM is untouched.
pub const RETURN_HOME: u8 = 0x02;

/// Entry mode set instruction (0x04)
///
/// Combine with [`ENTRY_LEFT`] and [`ENTRY_SHIFT_INCREMENT`].
pub const ENTRY_MODE_SET: u8 = 0x04;

/// Display on/off control instruction (0x08)
///
/// Combine with [`DISPLAY_ON`], [`CURSOR_ON`] and [`BLINK_ON`].
pub const DISPLAY_CONTROL: u8 = 0x08;

/// Cursor or display shift instruction (0x10)
pub const CURSOR_SHIFT: u8 = 0x10;

/// Function set instruction (0x20)
///
/// Selects interface width, line count and font.
pub const FUNCTION_SET: u8 = 0x20;

/// Set CGRAM address instruction (0x40)
///
/// The low 6 bits hold the CGRAM address. Each custom character occupies 8 bytes.
pub const SET_CGRAM_ADDR: u8 = 0x40;

/// Set DDRAM address instruction (0x80)
///
/// The low 7 bits hold the DDRAM address.
pub const SET_DDRAM_ADDR: u8 = 0x80;

// Entry mode flags

/// Text flows left to right (cursor increments)
pub const ENTRY_LEFT: u8 = 0x02;
/// Text flows right to left (cursor decrements)
pub const ENTRY_RIGHT: u8 = 0x00;
/// Shift the whole display on every write
pub const ENTRY_SHIFT_INCREMENT: u8 = 0x01;
/// Keep the display still on write
pub const ENTRY_SHIFT_DECREMENT: u8 = 0x00;

// Display control flags

/// Display output enabled
pub const DISPLAY_ON: u8 = 0x04;
/// Display output disabled (DDRAM is retained)
pub const DISPLAY_OFF: u8 = 0x00;
/// Underline cursor visible
pub const CURSOR_ON: u8 = 0x02;
/// Underline cursor hidden
pub const CURSOR_OFF: u8 = 0x00;
/// Cursor cell blinks
pub const BLINK_ON: u8 = 0x01;
/// Cursor cell steady
pub const BLINK_OFF: u8 = 0x00;

// Cursor shift flags

/// Shift the visible window instead of the cursor
pub const DISPLAY_MOVE: u8 = 0x08;
/// Move the cursor only
pub const CURSOR_MOVE: u8 = 0x00;
/// Shift to the right
pub const MOVE_RIGHT: u8 = 0x04;
/// Shift to the left
pub const MOVE_LEFT: u8 = 0x00;

// Function set flags

/// 8-bit data bus (only used as the reset nibble)
pub const EIGHT_BIT_MODE: u8 = 0x10;
/// 4-bit data bus
pub const FOUR_BIT_MODE: u8 = 0x00;
/// Two display lines (also used for 4-line panels)
pub const TWO_LINE: u8 = 0x08;
/// One display line
pub const ONE_LINE: u8 = 0x00;
/// 5x10 dot font, single-line panels only
pub const DOTS_5X10: u8 = 0x04;
/// 5x8 dot font
pub const DOTS_5X8: u8 = 0x00;

// Initialization nibbles

/// Nibble sent three times to force the controller into 8-bit mode
///
/// This is the high nibble of `FUNCTION_SET | EIGHT_BIT_MODE`.
pub const RESET_NIBBLE: u8 = (FUNCTION_SET | EIGHT_BIT_MODE) >> 4;

/// Nibble that switches the controller to the 4-bit interface
///
/// This is the high nibble of `FUNCTION_SET | FOUR_BIT_MODE`.
pub const FOUR_BIT_NIBBLE: u8 = (FUNCTION_SET | FOUR_BIT_MODE) >> 4;

/// Number of custom character slots in CGRAM
pub const CGRAM_SLOTS: u8 = 8;

/// Bytes per custom character bitmap (one per pixel row)
pub const CGRAM_CHAR_BYTES: usize = 8;

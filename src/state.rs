//! Cumulative controller flag registers
//!
//! The HD44780 has no single-bit write: entry mode and display control are
//! each set by one instruction carrying every flag. The driver therefore keeps
//! a copy of both registers, flips bits in memory and resends the whole byte.

use crate::command::{
    BLINK_ON, CURSOR_ON, DISPLAY_CONTROL, DISPLAY_ON, ENTRY_LEFT, ENTRY_MODE_SET,
    ENTRY_SHIFT_INCREMENT,
};

/// Entry mode register (text direction and shift-on-write)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntryMode(u8);

impl EntryMode {
    /// Mode selected by the controller's internal reset: left to right, no shift
    pub const fn reset() -> Self {
        Self(ENTRY_LEFT)
    }

    /// Raw flag bits (without the opcode)
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Full entry mode set instruction for the current flags
    pub fn instruction(self) -> u8 {
        ENTRY_MODE_SET | self.0
    }

    /// Whether text flows left to right
    pub fn is_left_to_right(self) -> bool {
        self.0 & ENTRY_LEFT != 0
    }

    /// Whether the display shifts on every write
    pub fn is_autoscroll(self) -> bool {
        self.0 & ENTRY_SHIFT_INCREMENT != 0
    }

    /// Select text direction
    pub fn set_left_to_right(&mut self, left_to_right: bool) {
        set_flag(&mut self.0, ENTRY_LEFT, left_to_right);
    }

    /// Select shift-on-write
    pub fn set_autoscroll(&mut self, autoscroll: bool) {
        set_flag(&mut self.0, ENTRY_SHIFT_INCREMENT, autoscroll);
    }
}

impl Default for EntryMode {
    fn default() -> Self {
        Self::reset()
    }
}

/// Display on/off control register
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayControl(u8);

impl DisplayControl {
    /// State set up during initialization: display on, cursor hidden, no blink
    pub const fn reset() -> Self {
        Self(DISPLAY_ON)
    }

    /// Raw flag bits (without the opcode)
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Full display control instruction for the current flags
    pub fn instruction(self) -> u8 {
        DISPLAY_CONTROL | self.0
    }

    /// Whether the display output is enabled
    pub fn is_display_on(self) -> bool {
        self.0 & DISPLAY_ON != 0
    }

    /// Whether the underline cursor is shown
    pub fn is_cursor_on(self) -> bool {
        self.0 & CURSOR_ON != 0
    }

    /// Whether the cursor cell blinks
    pub fn is_blink_on(self) -> bool {
        self.0 & BLINK_ON != 0
    }

    /// Enable or disable the display output
    pub fn set_display(&mut self, on: bool) {
        set_flag(&mut self.0, DISPLAY_ON, on);
    }

    /// Show or hide the cursor
    pub fn set_cursor(&mut self, on: bool) {
        set_flag(&mut self.0, CURSOR_ON, on);
    }

    /// Enable or disable cursor blinking
    pub fn set_blink(&mut self, on: bool) {
        set_flag(&mut self.0, BLINK_ON, on);
    }
}

impl Default for DisplayControl {
    fn default() -> Self {
        Self::reset()
    }
}

fn set_flag(bits: &mut u8, mask: u8, on: bool) {
    if on {
        *bits |= mask;
    } else {
        *bits &= !mask;
    }
}

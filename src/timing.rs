//! HD44780 timing requirements
//!
//! All delays are minimums from the controller data sheet, expressed in
//! microseconds. The driver never polls the busy flag, so every instruction is
//! followed by a fixed wait long enough for the slowest controller clock.

/// Wait after the bus comes up before the first instruction
///
/// The controller needs 40 ms after VCC rises above 2.7 V. The driver cannot
/// observe power-on, so it waits from bus activation instead.
pub const POWER_ON_DELAY_US: u32 = 50_000;

/// Wait after the first reset nibble
pub const RESET_FIRST_DELAY_US: u32 = 4_500;

/// Wait after the second and third reset nibbles
pub const RESET_REPEAT_DELAY_US: u32 = 200;

/// Enable pulse width
///
/// The data sheet asks for 450 ns; one microsecond is the smallest step of
/// the delay primitive.
pub const ENABLE_PULSE_US: u32 = 1;

/// Settle time after each nibble
///
/// Most instructions execute in 37 us.
pub const COMMAND_SETTLE_US: u32 = 37;

/// Execution time of clear display and return home (1.52 ms)
pub const CLEAR_DELAY_US: u32 = 1_600;

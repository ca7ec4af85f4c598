//! Core display operations
//!
//! [`Lcd`] turns high-level operations into the 4-bit handshake the HD44780
//! expects, written one expander pin byte at a time:
//!
//! 1. Each pin byte carries a nibble, RS, E and the backlight bit ([`crate::expander`]).
//! 2. Each nibble is strobed: E high, 1 us, E low, 37 us.
//! 3. Each instruction or character is two nibbles, high nibble first.
//!
//! Entry mode and display control are cumulative registers ([`crate::state`]);
//! every toggle resends the whole register.
//!
//! The driver is blocking and not reentrant. Wrap it in a mutex if several
//! tasks share one display.

use embedded_hal::delay::DelayNs;

use crate::command::{
    CGRAM_CHAR_BYTES, CGRAM_SLOTS, CLEAR_DISPLAY, CURSOR_SHIFT, DISPLAY_MOVE, FOUR_BIT_NIBBLE,
    MOVE_LEFT, MOVE_RIGHT, RESET_NIBBLE, RETURN_HOME, SET_CGRAM_ADDR, SET_DDRAM_ADDR,
};
use crate::config::{Dimensions, FontSize};
use crate::error::Error;
use crate::expander::{PinState, encode};
use crate::interface::ExpanderInterface;
use crate::state::{DisplayControl, EntryMode};
use crate::timing::{
    CLEAR_DELAY_US, COMMAND_SETTLE_US, ENABLE_PULSE_US, POWER_ON_DELAY_US, RESET_FIRST_DELAY_US,
    RESET_REPEAT_DELAY_US,
};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Backlight level used by [`Lcd::backlight_on`]
pub const BACKLIGHT_FULL: u8 = 0xFF;

/// HD44780 driver behind a PCF8574 expander
///
/// ## Example
///
/// ```rust,no_run
/// use hd44780_pcf8574::{Dimensions, FontSize, I2cInterface, Lcd};
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
/// let mut lcd = Lcd::new(I2cInterface::new(MockI2c, 0x27), MockDelay);
/// let dims = match Dimensions::new(16, 2) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let _ = lcd.begin(dims, FontSize::Dots5x8);
/// let _ = lcd.set_backlight(255);
/// let _ = lcd.set_cursor(0, 1);
/// let _ = lcd.print("Hello");
/// ```
pub struct Lcd<I, D>
where
    I: ExpanderInterface,
{
    /// Expander transport
    interface: I,
    /// Blocking delay source
    delay: D,
    /// Geometry, set by a successful `begin`
    dimensions: Option<Dimensions>,
    /// Entry mode register copy
    entry_mode: EntryMode,
    /// Display control register copy
    display_control: DisplayControl,
    /// Backlight level, any non-zero value lights the panel
    backlight: u8,
}

impl<I, D> Lcd<I, D>
where
    I: ExpanderInterface,
    D: DelayNs,
{
    /// Create a new driver
    ///
    /// Nothing is sent until [`begin`](Self::begin). The backlight starts off.
    pub fn new(interface: I, delay: D) -> Self {
        Self {
            interface,
            delay,
            dimensions: None,
            entry_mode: EntryMode::reset(),
            display_control: DisplayControl::reset(),
            backlight: 0,
        }
    }

    /// Run the power-on initialization sequence
    ///
    /// Forces the controller into 4-bit mode whatever state it was left in,
    /// then sets line count and font, turns the display on, clears it and
    /// restores left-to-right entry. Must be called before any other
    /// operation except [`set_backlight`](Self::set_backlight).
    ///
    /// If a bus write fails the controller state is unknown and the driver
    /// stays uninitialized. Calling `begin` again restarts the whole sequence.
    pub fn begin(&mut self, dimensions: Dimensions, font: FontSize) -> DisplayResult<I> {
        log::debug!(
            "initializing HD44780 {}x{} ({:?})",
            dimensions.cols,
            dimensions.rows,
            font
        );
        self.dimensions = None;

        // All pins low except the backlight
        self.write_pins(0x00, false, false)?;
        self.delay.delay_us(POWER_ON_DELAY_US);

        self.display_control = DisplayControl::reset();
        self.entry_mode = EntryMode::reset();

        // Initializing by instruction, see HD44780 data sheet figure 24
        self.send_nibble(RESET_NIBBLE, false)?;
        self.delay.delay_us(RESET_FIRST_DELAY_US);
        self.send_nibble(RESET_NIBBLE, false)?;
        self.delay.delay_us(RESET_REPEAT_DELAY_US);
        self.send_nibble(RESET_NIBBLE, false)?;
        self.delay.delay_us(RESET_REPEAT_DELAY_US);
        self.send_nibble(FOUR_BIT_NIBBLE, false)?;

        self.send_command(dimensions.function_set(font))?;
        self.send_command(self.display_control.instruction())?;
        self.send_command(CLEAR_DISPLAY)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        self.send_command(self.entry_mode.instruction())?;

        self.dimensions = Some(dimensions);
        log::debug!("HD44780 ready");
        Ok(())
    }

    /// Clear the display and move the cursor to the origin
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(CLEAR_DISPLAY)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        Ok(())
    }

    /// Move the cursor to the origin without clearing
    pub fn home(&mut self) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(RETURN_HOME)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        Ok(())
    }

    /// Move the cursor to `col`, `row` (both zero-based)
    ///
    /// Rows past the last configured row address the last row.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> DisplayResult<I> {
        let dimensions = self.ensure_initialized()?;
        self.send_command(SET_DDRAM_ADDR | dimensions.ddram_address(col, row))
    }

    /// Turn the display output on
    pub fn display(&mut self) -> DisplayResult<I> {
        self.update_display_control(|control| control.set_display(true))
    }

    /// Turn the display output off, keeping its contents
    pub fn no_display(&mut self) -> DisplayResult<I> {
        self.update_display_control(|control| control.set_display(false))
    }

    /// Show the underline cursor
    pub fn cursor(&mut self) -> DisplayResult<I> {
        self.update_display_control(|control| control.set_cursor(true))
    }

    /// Hide the underline cursor
    pub fn no_cursor(&mut self) -> DisplayResult<I> {
        self.update_display_control(|control| control.set_cursor(false))
    }

    /// Blink the cursor cell
    pub fn blink(&mut self) -> DisplayResult<I> {
        self.update_display_control(|control| control.set_blink(true))
    }

    /// Stop blinking the cursor cell
    pub fn no_blink(&mut self) -> DisplayResult<I> {
        self.update_display_control(|control| control.set_blink(false))
    }

    /// Shift the visible window one cell to the left
    ///
    /// DDRAM contents are unchanged.
    pub fn scroll_display_left(&mut self) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(CURSOR_SHIFT | DISPLAY_MOVE | MOVE_LEFT)
    }

    /// Shift the visible window one cell to the right
    pub fn scroll_display_right(&mut self) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(CURSOR_SHIFT | DISPLAY_MOVE | MOVE_RIGHT)
    }

    /// Text flows left to right
    pub fn left_to_right(&mut self) -> DisplayResult<I> {
        self.update_entry_mode(|mode| mode.set_left_to_right(true))
    }

    /// Text flows right to left
    pub fn right_to_left(&mut self) -> DisplayResult<I> {
        self.update_entry_mode(|mode| mode.set_left_to_right(false))
    }

    /// Shift the display on each write, right-justifying text at the cursor
    pub fn autoscroll(&mut self) -> DisplayResult<I> {
        self.update_entry_mode(|mode| mode.set_autoscroll(true))
    }

    /// Keep the display still on each write
    pub fn no_autoscroll(&mut self) -> DisplayResult<I> {
        self.update_entry_mode(|mode| mode.set_autoscroll(false))
    }

    /// Set the backlight level
    ///
    /// The expander has no PWM: any non-zero level turns the backlight on.
    /// One pin write is sent straight away so the change is visible without
    /// waiting for the next instruction. Allowed before [`begin`](Self::begin).
    pub fn set_backlight(&mut self, level: u8) -> DisplayResult<I> {
        self.backlight = level;
        self.write_pins(0x00, true, false)
    }

    /// Turn the backlight on
    pub fn backlight_on(&mut self) -> DisplayResult<I> {
        self.set_backlight(BACKLIGHT_FULL)
    }

    /// Turn the backlight off
    pub fn backlight_off(&mut self) -> DisplayResult<I> {
        self.set_backlight(0)
    }

    /// Define custom character `slot` (0-7) from an 8-row bitmap
    ///
    /// Only the low 5 bits of each row are displayed. The controller is left
    /// addressing CGRAM, so call [`set_cursor`](Self::set_cursor) or
    /// [`home`](Self::home) before writing text again.
    pub fn create_char(&mut self, slot: u8, bitmap: &[u8; CGRAM_CHAR_BYTES]) -> DisplayResult<I> {
        self.ensure_initialized()?;
        if slot >= CGRAM_SLOTS {
            return Err(Error::InvalidCharacterSlot { slot });
        }
        self.send_command(SET_CGRAM_ADDR | (slot << 3))?;
        for &row in bitmap {
            self.send_data(row)?;
        }
        Ok(())
    }

    /// Write one character code at the cursor
    ///
    /// The controller advances the cursor according to the entry mode.
    pub fn write_byte(&mut self, byte: u8) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_data(byte)
    }

    /// Write character codes in order
    pub fn write_bytes(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        self.ensure_initialized()?;
        for &byte in bytes {
            self.send_data(byte)?;
        }
        Ok(())
    }

    /// Write a string byte by byte
    ///
    /// The HD44780 character ROM matches ASCII for 0x20-0x7D; other bytes map
    /// to whatever the ROM variant holds.
    pub fn print(&mut self, text: &str) -> DisplayResult<I> {
        self.write_bytes(text.as_bytes())
    }

    /// Whether [`begin`](Self::begin) completed
    pub fn is_initialized(&self) -> bool {
        self.dimensions.is_some()
    }

    /// Get display dimensions, `None` before [`begin`](Self::begin)
    pub fn dimensions(&self) -> Option<&Dimensions> {
        self.dimensions.as_ref()
    }

    /// Get the backlight level
    pub fn backlight(&self) -> u8 {
        self.backlight
    }

    /// Get the tracked entry mode register
    pub fn entry_mode(&self) -> EntryMode {
        self.entry_mode
    }

    /// Get the tracked display control register
    pub fn display_control(&self) -> DisplayControl {
        self.display_control
    }

    /// Release the interface and delay
    pub fn release(self) -> (I, D) {
        (self.interface, self.delay)
    }

    fn ensure_initialized(&self) -> Result<Dimensions, Error<I>> {
        self.dimensions.ok_or(Error::NotInitialized)
    }

    fn update_display_control(&mut self, f: impl FnOnce(&mut DisplayControl)) -> DisplayResult<I> {
        self.ensure_initialized()?;
        f(&mut self.display_control);
        self.send_command(self.display_control.instruction())
    }

    fn update_entry_mode(&mut self, f: impl FnOnce(&mut EntryMode)) -> DisplayResult<I> {
        self.ensure_initialized()?;
        f(&mut self.entry_mode);
        self.send_command(self.entry_mode.instruction())
    }

    /// Send an instruction byte
    fn send_command(&mut self, command: u8) -> DisplayResult<I> {
        log::trace!("command {command:#04x}");
        self.send(command, false)
    }

    /// Send a display data byte
    fn send_data(&mut self, data: u8) -> DisplayResult<I> {
        self.send(data, true)
    }

    /// Send a full byte as two nibbles, high nibble first
    fn send(&mut self, value: u8, is_data: bool) -> DisplayResult<I> {
        self.send_nibble(value >> 4, is_data)?;
        self.send_nibble(value & 0x0F, is_data)
    }

    /// Strobe one nibble into the controller
    fn send_nibble(&mut self, nibble: u8, is_data: bool) -> DisplayResult<I> {
        self.write_pins(nibble, is_data, true)?;
        self.delay.delay_us(ENABLE_PULSE_US);
        self.write_pins(nibble, is_data, false)?;
        self.delay.delay_us(COMMAND_SETTLE_US);
        Ok(())
    }

    /// Latch one pin byte onto the expander
    fn write_pins(&mut self, nibble: u8, is_data: bool, enable: bool) -> DisplayResult<I> {
        let pins = encode(PinState {
            nibble,
            is_data,
            enable,
            backlight: self.backlight > 0,
        });
        self.interface.write_pins(pins).map_err(|e| {
            log::warn!("expander write {pins:#04x} failed: {e:?}");
            Error::Interface(e)
        })
    }
}

impl<I, D> core::fmt::Write for Lcd<I, D>
where
    I: ExpanderInterface,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.print(s).map_err(|_| core::fmt::Error)
    }
}

#[cfg(feature = "ufmt")]
impl<I, D> ufmt_write::uWrite for Lcd<I, D>
where
    I: ExpanderInterface,
    D: DelayNs,
{
    type Error = Error<I>;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.print(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::fmt::Write;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Event {
        Pins(u8),
        DelayUs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct BusError;

    #[derive(Debug)]
    struct MockInterface {
        log: Log,
        writes_before_failure: Option<usize>,
    }

    impl ExpanderInterface for MockInterface {
        type Error = BusError;

        fn write_pins(&mut self, pins: u8) -> Result<(), Self::Error> {
            if let Some(remaining) = self.writes_before_failure.as_mut() {
                if *remaining == 0 {
                    return Err(BusError);
                }
                *remaining -= 1;
            }
            self.log.borrow_mut().push(Event::Pins(pins));
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log
                .borrow_mut()
                .push(Event::DelayUs(ns.div_ceil(1_000)));
        }

        fn delay_us(&mut self, us: u32) {
            self.log.borrow_mut().push(Event::DelayUs(us));
        }
    }

    fn test_lcd_failing_after(writes: Option<usize>) -> (Lcd<MockInterface, MockDelay>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let interface = MockInterface {
            log: Rc::clone(&log),
            writes_before_failure: writes,
        };
        let delay = MockDelay {
            log: Rc::clone(&log),
        };
        (Lcd::new(interface, delay), log)
    }

    fn test_lcd() -> (Lcd<MockInterface, MockDelay>, Log) {
        test_lcd_failing_after(None)
    }

    fn started_lcd(cols: u8, rows: u8) -> (Lcd<MockInterface, MockDelay>, Log) {
        let (mut lcd, log) = test_lcd();
        lcd.begin(Dimensions::new(cols, rows).unwrap(), FontSize::Dots5x8)
            .unwrap();
        log.borrow_mut().clear();
        (lcd, log)
    }

    fn take(log: &Log) -> Vec<Event> {
        core::mem::take(&mut *log.borrow_mut())
    }

    /// Events of one strobed nibble with the backlight off
    fn nibble_events(nibble: u8, is_data: bool) -> [Event; 4] {
        let base = (nibble << 4) | u8::from(is_data);
        [
            Event::Pins(base | 0x04),
            Event::DelayUs(1),
            Event::Pins(base),
            Event::DelayUs(37),
        ]
    }

    fn byte_events(value: u8, is_data: bool) -> Vec<Event> {
        let mut events = Vec::new();
        events.extend(nibble_events(value >> 4, is_data));
        events.extend(nibble_events(value & 0x0F, is_data));
        events
    }

    /// Bytes sent with the enable strobe, rebuilt from nibble pairs
    fn sent_bytes(events: &[Event]) -> Vec<(u8, bool)> {
        let strobes: Vec<u8> = events
            .iter()
            .filter_map(|event| match event {
                Event::Pins(pins) if pins & 0x04 != 0 => Some(*pins),
                _ => None,
            })
            .collect();
        strobes
            .chunks(2)
            .map(|pair| ((pair[0] & 0xF0) | (pair[1] >> 4), pair[0] & 0x01 != 0))
            .collect()
    }

    #[test]
    fn test_begin_sequence() {
        let (mut lcd, log) = test_lcd();
        lcd.begin(Dimensions::new(16, 2).unwrap(), FontSize::Dots5x8)
            .unwrap();

        let mut expected = alloc::vec![Event::Pins(0x00), Event::DelayUs(50_000)];
        expected.extend(nibble_events(0x03, false));
        expected.push(Event::DelayUs(4_500));
        expected.extend(nibble_events(0x03, false));
        expected.push(Event::DelayUs(200));
        expected.extend(nibble_events(0x03, false));
        expected.push(Event::DelayUs(200));
        expected.extend(nibble_events(0x02, false));
        expected.extend(byte_events(0x28, false));
        expected.extend(byte_events(0x0C, false));
        expected.extend(byte_events(0x01, false));
        expected.push(Event::DelayUs(1_600));
        expected.extend(byte_events(0x06, false));

        assert_eq!(take(&log), expected);
        assert!(lcd.is_initialized());
    }

    #[test]
    fn test_begin_single_line_tall_font() {
        let (mut lcd, log) = test_lcd();
        lcd.begin(Dimensions::new(16, 1).unwrap(), FontSize::Dots5x10)
            .unwrap();
        let bytes = sent_bytes(&take(&log)[2..]);
        // Skip the four reset nibbles (two "bytes" of strobes)
        assert_eq!(bytes[2], (0x24, false));
    }

    #[test]
    fn test_begin_resets_tracked_flags() {
        let (mut lcd, _log) = started_lcd(16, 2);
        lcd.cursor().unwrap();
        lcd.right_to_left().unwrap();
        lcd.begin(Dimensions::new(16, 2).unwrap(), FontSize::Dots5x8)
            .unwrap();
        assert_eq!(lcd.display_control(), DisplayControl::reset());
        assert_eq!(lcd.entry_mode(), EntryMode::reset());
    }

    #[test]
    fn test_begin_failure_leaves_uninitialized() {
        let (mut lcd, _log) = test_lcd_failing_after(Some(5));
        let result = lcd.begin(Dimensions::new(16, 2).unwrap(), FontSize::Dots5x8);
        assert!(matches!(result, Err(Error::Interface(BusError))));
        assert!(!lcd.is_initialized());
        assert!(matches!(lcd.clear(), Err(Error::NotInitialized)));
    }

    #[test]
    fn test_operations_before_begin_fail() {
        let (mut lcd, log) = test_lcd();
        assert!(matches!(lcd.clear(), Err(Error::NotInitialized)));
        assert!(matches!(lcd.set_cursor(0, 0), Err(Error::NotInitialized)));
        assert!(matches!(lcd.display(), Err(Error::NotInitialized)));
        assert!(matches!(lcd.write_byte(b'A'), Err(Error::NotInitialized)));
        assert!(take(&log).is_empty());
        assert!(lcd.dimensions().is_none());
    }

    #[test]
    fn test_clear_and_home_wait() {
        let (mut lcd, log) = started_lcd(16, 2);
        lcd.clear().unwrap();
        let mut expected = byte_events(0x01, false);
        expected.push(Event::DelayUs(1_600));
        assert_eq!(take(&log), expected);

        lcd.home().unwrap();
        let mut expected = byte_events(0x02, false);
        expected.push(Event::DelayUs(1_600));
        assert_eq!(take(&log), expected);
    }

    #[test]
    fn test_set_cursor_addresses() {
        let (mut lcd, log) = started_lcd(20, 4);
        lcd.set_cursor(0, 0).unwrap();
        lcd.set_cursor(3, 1).unwrap();
        lcd.set_cursor(0, 2).unwrap();
        lcd.set_cursor(5, 3).unwrap();
        assert_eq!(
            sent_bytes(&take(&log)),
            alloc::vec![(0x80, false), (0xC3, false), (0x94, false), (0xD9, false)]
        );
    }

    #[test]
    fn test_set_cursor_clamps_to_configured_rows() {
        let (mut lcd, log) = started_lcd(16, 2);
        lcd.set_cursor(4, 1).unwrap();
        let last_row = take(&log);
        for row in [2u8, 3, 4, 200] {
            lcd.set_cursor(4, row).unwrap();
            assert_eq!(take(&log), last_row);
        }
    }

    #[test]
    fn test_set_cursor_clamps_to_table() {
        let (mut lcd, log) = started_lcd(20, 4);
        lcd.set_cursor(7, 3).unwrap();
        let last_row = take(&log);
        for row in [4u8, 5, 255] {
            lcd.set_cursor(7, row).unwrap();
            assert_eq!(take(&log), last_row);
        }
    }

    #[test]
    fn test_display_control_toggles() {
        let (mut lcd, log) = started_lcd(16, 2);
        lcd.cursor().unwrap();
        lcd.blink().unwrap();
        lcd.no_display().unwrap();
        lcd.display().unwrap();
        lcd.no_cursor().unwrap();
        lcd.no_blink().unwrap();
        assert_eq!(
            sent_bytes(&take(&log)),
            alloc::vec![
                (0x0E, false),
                (0x0F, false),
                (0x0B, false),
                (0x0F, false),
                (0x0D, false),
                (0x0C, false),
            ]
        );
    }

    #[test]
    fn test_toggles_are_idempotent() {
        let (mut lcd, log) = started_lcd(16, 2);
        lcd.display().unwrap();
        let once = take(&log);
        lcd.display().unwrap();
        assert_eq!(take(&log), once);

        lcd.autoscroll().unwrap();
        let once = take(&log);
        lcd.autoscroll().unwrap();
        assert_eq!(take(&log), once);
    }

    #[test]
    fn test_display_round_trip_keeps_other_bits() {
        let (mut lcd, _log) = started_lcd(16, 2);
        lcd.cursor().unwrap();
        lcd.no_display().unwrap();
        let before = lcd.display_control();
        lcd.display().unwrap();
        lcd.no_display().unwrap();
        assert_eq!(lcd.display_control(), before);
        assert!(lcd.display_control().is_cursor_on());
    }

    #[test]
    fn test_entry_mode_toggles() {
        let (mut lcd, log) = started_lcd(16, 2);
        lcd.right_to_left().unwrap();
        lcd.autoscroll().unwrap();
        lcd.left_to_right().unwrap();
        lcd.no_autoscroll().unwrap();
        assert_eq!(
            sent_bytes(&take(&log)),
            alloc::vec![(0x04, false), (0x05, false), (0x07, false), (0x06, false)]
        );
    }

    #[test]
    fn test_scroll_display() {
        let (mut lcd, log) = started_lcd(16, 2);
        lcd.scroll_display_left().unwrap();
        lcd.scroll_display_right().unwrap();
        assert_eq!(
            sent_bytes(&take(&log)),
            alloc::vec![(0x18, false), (0x1C, false)]
        );
    }

    #[test]
    fn test_set_backlight_emits_single_write() {
        let (mut lcd, log) = test_lcd();
        lcd.set_backlight(128).unwrap();
        assert_eq!(take(&log), alloc::vec![Event::Pins(0x09)]);
        assert_eq!(lcd.backlight(), 128);

        lcd.backlight_off().unwrap();
        assert_eq!(take(&log), alloc::vec![Event::Pins(0x01)]);
        lcd.backlight_on().unwrap();
        assert_eq!(lcd.backlight(), BACKLIGHT_FULL);
    }

    #[test]
    fn test_backlight_carried_on_every_write() {
        let (mut lcd, log) = started_lcd(16, 2);
        lcd.set_backlight(1).unwrap();
        take(&log);
        lcd.write_byte(b'A').unwrap();

        let pins: Vec<u8> = take(&log)
            .into_iter()
            .filter_map(|event| match event {
                Event::Pins(pins) => Some(pins),
                Event::DelayUs(_) => None,
            })
            .collect();
        assert_eq!(pins, alloc::vec![0x4D, 0x49, 0x1D, 0x19]);
    }

    #[test]
    fn test_create_char() {
        let (mut lcd, log) = started_lcd(16, 2);
        let bitmap = [0x00, 0x0A, 0x1F, 0x1F, 0x0E, 0x04, 0x00, 0x00];
        lcd.create_char(3, &bitmap).unwrap();

        let bytes = sent_bytes(&take(&log));
        assert_eq!(bytes.len(), 9);
        assert_eq!(bytes[0], (0x40 | 24, false));
        for (sent, row) in bytes[1..].iter().zip(bitmap) {
            assert_eq!(*sent, (row, true));
        }
    }

    #[test]
    fn test_create_char_invalid_slot() {
        let (mut lcd, log) = started_lcd(16, 2);
        let result = lcd.create_char(8, &[0; 8]);
        assert!(matches!(
            result,
            Err(Error::InvalidCharacterSlot { slot: 8 })
        ));
        assert!(take(&log).is_empty());
    }

    #[test]
    fn test_write_byte_is_data() {
        let (mut lcd, log) = started_lcd(16, 2);
        lcd.write_byte(0x41).unwrap();
        assert_eq!(take(&log), byte_events(0x41, true));
    }

    #[test]
    fn test_fmt_write() {
        let (mut lcd, log) = started_lcd(16, 2);
        write!(lcd, "Hi {}", 7).unwrap();
        assert_eq!(
            sent_bytes(&take(&log)),
            alloc::vec![(b'H', true), (b'i', true), (b' ', true), (b'7', true)]
        );
    }

    #[test]
    fn test_transport_error_propagates() {
        let (mut lcd, _log) = test_lcd_failing_after(Some(0));
        assert!(matches!(
            lcd.set_backlight(1),
            Err(Error::Interface(BusError))
        ));
    }

    #[test]
    fn test_release() {
        let (lcd, log) = started_lcd(16, 2);
        let (interface, _delay) = lcd.release();
        assert!(Rc::ptr_eq(&interface.log, &log));
    }
}

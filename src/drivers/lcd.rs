//! Character LCD Driver
//!
//! HD44780-compatible 16x2 display on a 4-bit parallel bus
//! (RS, EN, D4..D7; R/W tied low). Write-only: the busy flag is never
//! read, fixed delays cover each instruction's execution time.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{LCD_COLUMNS, LCD_ROWS};
use crate::game::io::CharDisplay;

/// HD44780 instructions
mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    pub const ENTRY_INCREMENT: u8 = 0x02;
    pub const DISPLAY_ON: u8 = 0x04;
    pub const TWO_LINES: u8 = 0x08;
}

/// DDRAM address of each row's first column
const ROW_OFFSETS: [u8; LCD_ROWS] = [0x00, 0x40];

/// 4-bit parallel HD44780 driver
pub struct Lcd<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
}

impl<P, D> Lcd<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create the driver and run the power-on initialization sequence
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        let mut lcd = Self { rs, en, data, delay };
        lcd.init();
        lcd
    }

    /// Initialization by instruction (datasheet figure 24)
    fn init(&mut self) {
        self.delay.delay_ms(50);
        let _ = self.rs.set_low();
        let _ = self.en.set_low();

        // Three 8-bit function sets force a known state, then switch to 4-bit
        self.write_nibble(0x03);
        self.delay.delay_us(4_500);
        self.write_nibble(0x03);
        self.delay.delay_us(4_500);
        self.write_nibble(0x03);
        self.delay.delay_us(150);
        self.write_nibble(0x02);

        self.command(cmd::FUNCTION_SET | cmd::TWO_LINES);
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON);
        self.clear();
        self.command(cmd::ENTRY_MODE_SET | cmd::ENTRY_INCREMENT);
    }

    fn command(&mut self, value: u8) {
        let _ = self.rs.set_low();
        self.write_byte(value);
    }

    fn data_byte(&mut self, value: u8) {
        let _ = self.rs.set_high();
        self.write_byte(value);
    }

    fn write_byte(&mut self, value: u8) {
        self.write_nibble(value >> 4);
        self.write_nibble(value & 0x0F);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            let _ = if nibble & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
        }
        let _ = self.en.set_high();
        self.delay.delay_us(1);
        let _ = self.en.set_low();
        // Most instructions need 37us; leave headroom
        self.delay.delay_us(100);
    }
}

impl<P, D> CharDisplay for Lcd<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn clear(&mut self) {
        self.command(cmd::CLEAR_DISPLAY);
        self.delay.delay_us(2_000);
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        let row = usize::from(row).min(LCD_ROWS - 1);
        let col = col.min(LCD_COLUMNS as u8 - 1);
        self.command(cmd::SET_DDRAM_ADDR | (ROW_OFFSETS[row] + col));
    }

    fn print(&mut self, text: &str) {
        for byte in text.bytes() {
            // Non-ASCII falls back to a blank cell
            let glyph = if byte.is_ascii() && !byte.is_ascii_control() {
                byte
            } else {
                b' '
            };
            self.data_byte(glyph);
        }
    }
}

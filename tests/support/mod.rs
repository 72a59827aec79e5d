//! In-memory fakes for the collaborator traits and embedded-hal buses.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};

use reflex_firmware::config::{LCD_COLUMNS, LCD_ROWS};
use reflex_firmware::game::io::{
    Actuator, CharDisplay, CueSource, LinkError, LinkResult, PeripheralLink, StartTrigger,
    Timebase,
};
use reflex_firmware::protocol::{Command, PROBE};
use reflex_firmware::types::{CueColor, ServoAngle};

// ============================================================================
// embedded-hal level fakes
// ============================================================================

/// Something that happened on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wire {
    /// Select line driven (true = asserted / low)
    Select(bool),
    /// One byte clocked out
    Byte(u8),
}

/// Shared wire log
pub type WireLog = Rc<RefCell<Vec<Wire>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusFault;

impl spi::Error for BusFault {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

/// SPI bus answering from a reply queue; idles with the probe echo
pub struct FakeSpi {
    pub log: WireLog,
    pub replies: VecDeque<u8>,
    pub fail: bool,
}

impl FakeSpi {
    pub fn new(log: WireLog) -> Self {
        Self {
            log,
            replies: VecDeque::new(),
            fail: false,
        }
    }

    fn clock(&mut self, out: u8) -> Result<u8, BusFault> {
        if self.fail {
            return Err(BusFault);
        }
        self.log.borrow_mut().push(Wire::Byte(out));
        Ok(self.replies.pop_front().unwrap_or(PROBE))
    }
}

impl spi::ErrorType for FakeSpi {
    type Error = BusFault;
}

impl SpiBus<u8> for FakeSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for w in words.iter_mut() {
            *w = self.clock(0)?;
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for &w in words {
            self.clock(w)?;
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        for (i, &w) in write.iter().enumerate() {
            let r = self.clock(w)?;
            if let Some(slot) = read.get_mut(i) {
                *slot = r;
            }
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for w in words.iter_mut() {
            *w = self.clock(*w)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Select pin that records its level in the wire log
pub struct FakeSelect {
    pub log: WireLog,
    pub high: bool,
}

impl FakeSelect {
    pub fn new(log: WireLog) -> Self {
        Self { log, high: false }
    }
}

impl digital::ErrorType for FakeSelect {
    type Error = Infallible;
}

impl OutputPin for FakeSelect {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.log.borrow_mut().push(Wire::Select(true));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.log.borrow_mut().push(Wire::Select(false));
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// Select pin that cannot be driven
pub struct BrokenSelect;

impl digital::ErrorType for BrokenSelect {
    type Error = PinFault;
}

impl OutputPin for BrokenSelect {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }
}

// ============================================================================
// Collaborator fakes
// ============================================================================

/// Peripheral link that records commands and answers probes from a queue
#[derive(Default)]
pub struct FakeLink {
    pub commands: Vec<Command>,
    pub replies: VecDeque<u8>,
    pub probes: usize,
    pub fail: bool,
}

impl FakeLink {
    pub fn reply(&mut self, byte: u8) {
        self.replies.push_back(byte);
    }
}

impl PeripheralLink for FakeLink {
    fn transmit(&mut self, command: Command) -> LinkResult<()> {
        if self.fail {
            return Err(LinkError::Bus);
        }
        self.commands.push(command);
        Ok(())
    }

    fn probe(&mut self) -> LinkResult<u8> {
        if self.fail {
            return Err(LinkError::Bus);
        }
        self.probes += 1;
        Ok(self.replies.pop_front().unwrap_or(PROBE))
    }
}

/// 16x2 character grid
pub struct FakeDisplay {
    cells: [[u8; LCD_COLUMNS]; LCD_ROWS],
    col: usize,
    row: usize,
    pub clears: usize,
}

impl Default for FakeDisplay {
    fn default() -> Self {
        Self {
            cells: [[b' '; LCD_COLUMNS]; LCD_ROWS],
            col: 0,
            row: 0,
            clears: 0,
        }
    }
}

impl FakeDisplay {
    /// Row text with trailing blanks removed
    pub fn row(&self, row: usize) -> String {
        String::from_utf8_lossy(&self.cells[row]).trim_end().to_string()
    }
}

impl CharDisplay for FakeDisplay {
    fn clear(&mut self) {
        self.cells = [[b' '; LCD_COLUMNS]; LCD_ROWS];
        self.col = 0;
        self.row = 0;
        self.clears += 1;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = usize::from(col);
        self.row = usize::from(row);
    }

    fn print(&mut self, text: &str) {
        for byte in text.bytes() {
            if self.col < LCD_COLUMNS && self.row < LCD_ROWS {
                self.cells[self.row][self.col] = byte;
            }
            self.col += 1;
        }
    }
}

/// Records every angle written
#[derive(Default)]
pub struct FakeServo {
    pub writes: Vec<ServoAngle>,
}

impl FakeServo {
    pub fn last(&self) -> Option<ServoAngle> {
        self.writes.last().copied()
    }
}

impl Actuator for FakeServo {
    fn write(&mut self, angle: ServoAngle) {
        self.writes.push(angle);
    }
}

/// Clock advanced by hand; pauses move it forward
#[derive(Default)]
pub struct ManualClock {
    pub now: u64,
    pub pauses: Vec<u32>,
}

impl ManualClock {
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Timebase for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn pause_ms(&mut self, ms: u32) {
        self.pauses.push(ms);
        self.now += u64::from(ms);
    }
}

/// Colors from a fixed cycle
pub struct ScriptedCues {
    colors: Vec<CueColor>,
    next: usize,
}

impl ScriptedCues {
    pub fn new(colors: &[CueColor]) -> Self {
        Self {
            colors: colors.to_vec(),
            next: 0,
        }
    }
}

impl CueSource for ScriptedCues {
    fn next_color(&mut self) -> CueColor {
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color
    }
}

/// Button whose reads come from a script, then a resting level
pub struct FakeButton {
    pub script: VecDeque<bool>,
    pub pressed: bool,
    pub reads: usize,
}

impl FakeButton {
    pub fn released() -> Self {
        Self {
            script: VecDeque::new(),
            pressed: false,
            reads: 0,
        }
    }

    pub fn held() -> Self {
        Self {
            pressed: true,
            ..Self::released()
        }
    }

    pub fn scripted(levels: &[bool], rest: bool) -> Self {
        Self {
            script: levels.iter().copied().collect(),
            pressed: rest,
            reads: 0,
        }
    }
}

impl StartTrigger for FakeButton {
    fn is_pressed(&mut self) -> bool {
        self.reads += 1;
        self.script.pop_front().unwrap_or(self.pressed)
    }
}

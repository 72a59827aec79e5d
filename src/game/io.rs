//! Collaborator Contracts
//!
//! Traits for every peripheral the game controller talks to. The embedded
//! build implements them over STM32 peripherals; host tests implement them
//! with in-memory fakes.

use crate::types::{CueColor, Rating, ServoAngle};
use crate::protocol::Command;

/// Character display (16x2). Writes are fire-and-forget.
pub trait CharDisplay {
    /// Blank the screen and home the cursor
    fn clear(&mut self);

    /// Move the cursor
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Write text at the cursor
    fn print(&mut self, text: &str);
}

/// Angular actuator driven as a countdown gauge
pub trait Actuator {
    /// Move to an absolute position
    fn write(&mut self, angle: ServoAngle);
}

/// Active-low start input
pub trait StartTrigger {
    /// Current level reads "pressed"
    fn is_pressed(&mut self) -> bool;
}

/// Monotonic millisecond clock with blocking pauses
pub trait Timebase {
    /// Milliseconds since boot
    fn now_ms(&self) -> u64;

    /// Block for a fixed pacing delay
    fn pause_ms(&mut self, ms: u32);
}

/// Source of round colors
pub trait CueSource {
    /// Next color, uniformly distributed
    fn next_color(&mut self) -> CueColor;
}

/// Link error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkError {
    /// SPI transfer failed
    Bus,
    /// Select line could not be driven
    Select,
}

#[cfg(feature = "embedded")]
impl defmt::Format for LinkError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Bus => defmt::write!(f, "bus"),
            Self::Select => defmt::write!(f, "select"),
        }
    }
}

/// Link operation result
pub type LinkResult<T> = Result<T, LinkError>;

/// Half-duplex command/reply exchange with the cue peripheral
pub trait PeripheralLink {
    /// Send a framed command
    fn transmit(&mut self, command: Command) -> LinkResult<()>;

    /// Clock out one probe byte and return what the peripheral shifted back
    fn probe(&mut self) -> LinkResult<u8>;

    /// Probe and decode; `None` while no rating is available
    fn poll_reply(&mut self) -> LinkResult<Option<Rating>> {
        Ok(Rating::from_byte(self.probe()?))
    }

    /// Command followed by a probe transfer, returning the raw reply byte
    fn send_command(&mut self, command: Command) -> LinkResult<u8> {
        self.transmit(command)?;
        self.probe()
    }

    /// Turn off every indicator
    fn deactivate_all(&mut self) -> LinkResult<u8> {
        self.send_command(Command::AllOff)
    }
}

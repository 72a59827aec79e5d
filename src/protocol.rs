//! Cue Peripheral Protocol
//!
//! Wire vocabulary between the master and the cue peripheral.
//! Commands are one or two ASCII bytes; every reply is a single byte.
//!
//! ```text
//! master -> peripheral    "0"                 all indicators off
//!                         "1r" "1g" "1b"      player 1 red/green/blue
//!                         "2r" "2g" "2b"      player 2 red/green/blue
//! peripheral -> master    'a' 'b' 'c'         graded hit
//!                         'i'                 miss / wrong button
//!                         '#'                 probe echo, no data
//! ```

use crate::types::{Cue, CueColor, Player, Rating};

/// Probe byte clocked out to read the peripheral's reply register.
/// Never a valid rating.
pub const PROBE: u8 = b'#';

/// Command byte for "all indicators off"
pub const ALL_OFF: u8 = b'0';

/// Command sent to the cue peripheral
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Turn off every indicator
    AllOff,
    /// Light a color for one player
    Activate(Cue),
}

impl Command {
    /// Wire encoding
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::AllOff => &[ALL_OFF],
            Self::Activate(cue) => match (cue.player, cue.color) {
                (Player::One, CueColor::Red) => b"1r",
                (Player::One, CueColor::Green) => b"1g",
                (Player::One, CueColor::Blue) => b"1b",
                (Player::Two, CueColor::Red) => b"2r",
                (Player::Two, CueColor::Green) => b"2g",
                (Player::Two, CueColor::Blue) => b"2b",
            },
        }
    }

    /// Decode a command as the peripheral sees it
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [ALL_OFF] => Some(Self::AllOff),
            [slot, letter] => {
                let player = match slot {
                    b'1' => Player::One,
                    b'2' => Player::Two,
                    _ => return None,
                };
                let color = match letter {
                    b'r' => CueColor::Red,
                    b'g' => CueColor::Green,
                    b'b' => CueColor::Blue,
                    _ => return None,
                };
                Some(Self::Activate(Cue::new(player, color)))
            }
            _ => None,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Command {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::AllOff => defmt::write!(f, "AllOff"),
            Self::Activate(cue) => defmt::write!(f, "Activate({})", cue),
        }
    }
}

impl Rating {
    /// Decode a reply byte; anything but `a`/`b`/`c`/`i` means "no answer yet"
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'a' => Some(Self::Best),
            b'b' => Some(Self::Mid),
            b'c' => Some(Self::Low),
            b'i' => Some(Self::Miss),
            _ => None,
        }
    }

    /// Wire byte for this rating
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Best => b'a',
            Self::Mid => b'b',
            Self::Low => b'c',
            Self::Miss => b'i',
        }
    }
}

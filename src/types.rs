//! Shared types used across the reflex game firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

use crate::config::{
    POINTS_BEST, POINTS_LOW, POINTS_MID, POINTS_MISS, SERVO_MAX_ANGLE, SERVO_MAX_PULSE_US,
    SERVO_MIN_PULSE_US,
};

/// One of the two players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Player {
    /// Player 1 (always opens the game)
    #[default]
    One,
    /// Player 2
    Two,
}

impl Player {
    /// The other player
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Short display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "P1",
            Self::Two => "P2",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Player {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.label());
    }
}

/// Color cue shown to the active player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CueColor {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

impl CueColor {
    /// All colors, in draw order
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Map an arbitrary random value onto a color
    #[must_use]
    pub const fn from_random(value: u32) -> Self {
        match value % 3 {
            0 => Self::Red,
            1 => Self::Green,
            _ => Self::Blue,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for CueColor {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.name());
    }
}

/// A round's assignment: who plays and which color lights up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cue {
    /// Player who owns the round
    pub player: Player,
    /// Color sent to the peripheral
    pub color: CueColor,
}

impl Cue {
    /// Create a cue
    #[must_use]
    pub const fn new(player: Player, color: CueColor) -> Self {
        Self { player, color }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Cue {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}:{}", self.player, self.color);
    }
}

/// Reply grade reported by the peripheral
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rating {
    /// Fastest / most accurate press (`a`)
    Best,
    /// Middle grade (`b`)
    Mid,
    /// Slow but valid press (`c`)
    Low,
    /// Wrong button or no press (`i`)
    Miss,
}

impl Rating {
    /// Points awarded for this rating
    #[must_use]
    pub const fn points(self) -> u16 {
        match self {
            Self::Best => POINTS_BEST,
            Self::Mid => POINTS_MID,
            Self::Low => POINTS_LOW,
            Self::Miss => POINTS_MISS,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Rating {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Best => defmt::write!(f, "best"),
            Self::Mid => defmt::write!(f, "mid"),
            Self::Low => defmt::write!(f, "low"),
            Self::Miss => defmt::write!(f, "miss"),
        }
    }
}

/// Per-player score totals
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Scoreboard {
    /// Player 1 total
    pub player1: u16,
    /// Player 2 total
    pub player2: u16,
}

impl Scoreboard {
    /// Both scores at zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player1: 0,
            player2: 0,
        }
    }

    /// Score for one player
    #[must_use]
    pub const fn get(&self, player: Player) -> u16 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    /// Add points to one player (saturating)
    pub fn add(&mut self, player: Player, points: u16) {
        let slot = match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        };
        *slot = slot.saturating_add(points);
    }

    /// Combined total of both players
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.player1 as u32 + self.player2 as u32
    }

    /// Decide the game result
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        if self.player1 > self.player2 {
            Outcome::Winner(Player::One)
        } else if self.player2 > self.player1 {
            Outcome::Winner(Player::Two)
        } else {
            Outcome::Draw
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Scoreboard {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "P1={} P2={}", self.player1, self.player2);
    }
}

/// End-of-game result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// One player scored strictly more
    Winner(Player),
    /// Equal scores
    Draw,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Outcome {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Winner(p) => defmt::write!(f, "winner {}", p),
            Self::Draw => defmt::write!(f, "draw"),
        }
    }
}

/// Servo position in whole degrees, clamped to `0..=SERVO_MAX_ANGLE`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ServoAngle(u8);

impl ServoAngle {
    /// Gauge at rest
    pub const ZERO: Self = Self(0);

    /// Gauge fully swept
    pub const MAX: Self = Self(SERVO_MAX_ANGLE);

    /// Create from degrees, clamping above the maximum
    #[must_use]
    pub const fn from_degrees(degrees: u8) -> Self {
        if degrees > SERVO_MAX_ANGLE {
            Self(SERVO_MAX_ANGLE)
        } else {
            Self(degrees)
        }
    }

    /// Linear countdown gauge: maps `elapsed` over `[0, duration]` onto
    /// `[0, SERVO_MAX_ANGLE]` with integer truncation.
    #[must_use]
    pub const fn from_progress(elapsed_ms: u64, duration_ms: u64) -> Self {
        if duration_ms == 0 || elapsed_ms >= duration_ms {
            return Self::MAX;
        }
        let degrees = elapsed_ms * SERVO_MAX_ANGLE as u64 / duration_ms;
        Self(degrees as u8)
    }

    /// Angle in degrees
    #[must_use]
    pub const fn degrees(self) -> u8 {
        self.0
    }

    /// Servo pulse width for this angle in microseconds
    #[must_use]
    pub const fn pulse_us(self) -> u32 {
        let span = SERVO_MAX_PULSE_US - SERVO_MIN_PULSE_US;
        SERVO_MIN_PULSE_US + self.0 as u32 * span / SERVO_MAX_ANGLE as u32
    }
}

impl fmt::Debug for ServoAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServoAngle({} deg)", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ServoAngle {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} deg", self.0);
    }
}

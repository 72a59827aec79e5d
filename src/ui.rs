//! User Interface
//!
//! Text layout for every screen shown on the 16x2 character display.

use core::fmt::Write;

use heapless::String;

use crate::config::{LCD_COLUMNS, LCD_ROWS};
use crate::game::io::CharDisplay;
use crate::types::{Cue, Outcome, Scoreboard};

/// One display row
pub type Line = String<LCD_COLUMNS>;

/// Screen contents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Power-on greeting
    Welcome,
    /// Shown briefly when a game starts
    GameStart,
    /// Whose turn and which color
    Turn(Cue),
    /// Running scores
    Scores(Scoreboard),
    /// End-of-game result with final scores
    Result(Outcome, Scoreboard),
    /// Idle prompt after a game
    PressStart,
}

impl Screen {
    /// Text for both rows; an empty row is left blank
    #[must_use]
    pub fn lines(&self) -> [Line; LCD_ROWS] {
        let mut top = Line::new();
        let mut bottom = Line::new();

        match self {
            Self::Welcome => {
                top.push_str("Reflex Game!").ok();
                bottom.push_str("Press Start").ok();
            }
            Self::GameStart => {
                top.push_str("Game Start!").ok();
            }
            Self::Turn(cue) => {
                write!(top, "{} Turn: {}", cue.player.label(), cue.color.name()).ok();
            }
            Self::Scores(scores) => {
                write!(top, "P1: {}", scores.player1).ok();
                write!(bottom, "P2: {}", scores.player2).ok();
            }
            Self::Result(outcome, scores) => {
                match outcome {
                    Outcome::Winner(player) => {
                        write!(top, "Winner: {}", player.label()).ok();
                    }
                    Outcome::Draw => {
                        top.push_str("It's a Draw!").ok();
                    }
                }
                write!(bottom, "P1: {} P2: {}", scores.player1, scores.player2).ok();
            }
            Self::PressStart => {
                top.push_str("Press Start!").ok();
            }
        }

        [top, bottom]
    }

    /// Clear the display and draw this screen
    pub fn render<D: CharDisplay>(&self, display: &mut D) {
        display.clear();
        for (row, line) in (0u8..).zip(self.lines().iter()) {
            if !line.is_empty() {
                display.set_cursor(0, row);
                display.print(line);
            }
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Welcome => defmt::write!(f, "Welcome"),
            Self::GameStart => defmt::write!(f, "GameStart"),
            Self::Turn(cue) => defmt::write!(f, "Turn({})", cue),
            Self::Scores(s) => defmt::write!(f, "Scores({})", s),
            Self::Result(o, s) => defmt::write!(f, "Result({}, {})", o, s),
            Self::PressStart => defmt::write!(f, "PressStart"),
        }
    }
}

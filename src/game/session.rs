//! Game Session
//!
//! The state of one game: scores, whose turn it is, and round/game timing.
//! Pure bookkeeping with no I/O; the controller drives it and performs
//! the peripheral side effects.
//!
//! A round that never receives a valid rating contributes zero points.
//! "No reply" and "miss" are indistinguishable in the score.

use crate::config::{GAME_DURATION_MS, ROUND_DURATION_MS};
use crate::types::{Cue, CueColor, Player, Rating, Scoreboard, ServoAngle};

/// Points credited by one accepted rating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Award {
    /// Player credited (the owner of the round's cue)
    pub player: Player,
    /// Rating that was accepted
    pub rating: Rating,
    /// Points added
    pub points: u16,
}

/// One live game
#[derive(Clone, Debug)]
pub struct GameSession {
    scores: Scoreboard,
    active: Player,
    game_started_ms: u64,
    round_started_ms: u64,
    cue: Cue,
    awaiting_response: bool,
    rounds_played: u16,
    rounds_answered: u16,
}

impl GameSession {
    /// Start a game at `now_ms`: zero scores, player 1 to move, no round
    /// opened yet.
    #[must_use]
    pub const fn start(now_ms: u64) -> Self {
        Self {
            scores: Scoreboard::new(),
            active: Player::One,
            game_started_ms: now_ms,
            round_started_ms: now_ms,
            cue: Cue::new(Player::One, CueColor::Red),
            awaiting_response: false,
            rounds_played: 0,
            rounds_answered: 0,
        }
    }

    /// Current scores
    #[must_use]
    pub const fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Player whose turn it is
    #[must_use]
    pub const fn active(&self) -> Player {
        self.active
    }

    /// Cue of the current round
    #[must_use]
    pub const fn cue(&self) -> Cue {
        self.cue
    }

    /// A round command is outstanding and unanswered
    #[must_use]
    pub const fn awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    /// Rounds opened so far
    #[must_use]
    pub const fn rounds_played(&self) -> u16 {
        self.rounds_played
    }

    /// Rounds that received a valid rating
    #[must_use]
    pub const fn rounds_answered(&self) -> u16 {
        self.rounds_answered
    }

    /// Time the game started
    #[must_use]
    pub const fn game_started_ms(&self) -> u64 {
        self.game_started_ms
    }

    /// Time the current round started
    #[must_use]
    pub const fn round_started_ms(&self) -> u64 {
        self.round_started_ms
    }

    /// Milliseconds since the game started
    #[must_use]
    pub const fn game_elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.game_started_ms)
    }

    /// Milliseconds since the current round started
    #[must_use]
    pub const fn round_elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.round_started_ms)
    }

    /// Current round's window has closed
    #[must_use]
    pub const fn round_expired(&self, now_ms: u64) -> bool {
        self.round_elapsed_ms(now_ms) >= ROUND_DURATION_MS
    }

    /// Whole game has run its course
    #[must_use]
    pub const fn game_over(&self, now_ms: u64) -> bool {
        self.game_elapsed_ms(now_ms) >= GAME_DURATION_MS
    }

    /// Countdown gauge position
    #[must_use]
    pub const fn gauge(&self, now_ms: u64) -> ServoAngle {
        ServoAngle::from_progress(self.game_elapsed_ms(now_ms), GAME_DURATION_MS)
    }

    /// Open a round for the active player with `color`
    pub fn open_round(&mut self, color: CueColor) -> Cue {
        self.cue = Cue::new(self.active, color);
        self.awaiting_response = true;
        self.rounds_played = self.rounds_played.saturating_add(1);
        self.cue
    }

    /// Close the current round at `now_ms` and hand the turn over.
    /// Any outstanding reply is abandoned.
    pub fn advance_turn(&mut self, now_ms: u64) -> Player {
        self.awaiting_response = false;
        self.active = self.active.other();
        self.round_started_ms = now_ms;
        self.active
    }

    /// Credit a rating to the owner of the current cue.
    /// Returns `None` when no round is waiting for a reply.
    pub fn apply_rating(&mut self, rating: Rating) -> Option<Award> {
        if !self.awaiting_response {
            return None;
        }
        let player = self.cue.player;
        let points = rating.points();
        self.scores.add(player, points);
        self.awaiting_response = false;
        self.rounds_answered = self.rounds_answered.saturating_add(1);
        Some(Award {
            player,
            rating,
            points,
        })
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for GameSession {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Session({}, turn {}, round {})",
            self.scores,
            self.active,
            self.rounds_played
        );
    }
}

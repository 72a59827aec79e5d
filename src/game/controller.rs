//! Game Controller
//!
//! Drives a game from the idle prompt through timed rounds to the result
//! screen and back. Each call to [`GameController::poll`] is one loop
//! iteration for the current phase:
//!
//! ```text
//!   Idle ──start edge──▶ Starting ──▶ Playing ──game over──▶ Ending ──▶ Idle
//!                                      │  ▲
//!                                      └──┘ round boundary / reply / gauge
//! ```
//!
//! The start input is read only while idle, so a press during a game has
//! no effect. The only blocking calls are the fixed pacing pauses.

use heapless::Vec;

use super::io::{Actuator, CharDisplay, CueSource, LinkError, PeripheralLink, StartTrigger, Timebase};
use super::session::{Award, GameSession};
use crate::config::{START_BANNER_MS, START_SETTLE_MS, WINNER_DWELL_MS};
use crate::protocol::{Command, PROBE};
use crate::types::{Cue, CueColor, Outcome, Rating, Scoreboard, ServoAngle};
use crate::ui::Screen;

/// Most events a single poll can produce
pub const MAX_EVENTS_PER_POLL: usize = 4;

/// Controller phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the start button
    #[default]
    Idle,
    /// Start accepted, session about to be set up
    Starting,
    /// Rounds running
    Playing,
    /// Time is up, result pending
    Ending,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Phase {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Idle => defmt::write!(f, "Idle"),
            Self::Starting => defmt::write!(f, "Starting"),
            Self::Playing => defmt::write!(f, "Playing"),
            Self::Ending => defmt::write!(f, "Ending"),
        }
    }
}

/// Something that happened during a poll, for the caller to log
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Start button accepted
    StartAccepted,
    /// New session set up
    Started,
    /// A round's cue was sent
    RoundStarted(Cue),
    /// A rating was credited
    Scored(Award),
    /// Reply byte that is neither a rating nor the probe echo
    ReplyIgnored(u8),
    /// Bus exchange failed; treated as no reply
    LinkFault(LinkError),
    /// Game over
    Finished {
        /// Final scores
        scores: Scoreboard,
        /// Winner or draw
        outcome: Outcome,
        /// Rounds opened
        rounds_played: u16,
        /// Rounds that got a valid rating
        rounds_answered: u16,
    },
}

#[cfg(feature = "embedded")]
impl defmt::Format for GameEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::StartAccepted => defmt::write!(f, "StartAccepted"),
            Self::Started => defmt::write!(f, "Started"),
            Self::RoundStarted(cue) => defmt::write!(f, "RoundStarted({})", cue),
            Self::Scored(award) => defmt::write!(
                f,
                "Scored({} {} +{})",
                award.player,
                award.rating,
                award.points
            ),
            Self::ReplyIgnored(byte) => defmt::write!(f, "ReplyIgnored(0x{:02X})", byte),
            Self::LinkFault(err) => defmt::write!(f, "LinkFault({})", err),
            Self::Finished {
                scores,
                outcome,
                rounds_played,
                rounds_answered,
            } => defmt::write!(
                f,
                "Finished({}, {}, {}/{} answered)",
                scores,
                outcome,
                rounds_answered,
                rounds_played
            ),
        }
    }
}

/// Events from one poll
pub type Events = Vec<GameEvent, MAX_EVENTS_PER_POLL>;

fn emit(events: &mut Events, event: GameEvent) {
    let _ = events.push(event);
}

/// Game state machine and peripheral orchestration
pub struct GameController<L, D, A, T, R> {
    link: L,
    display: D,
    actuator: A,
    time: T,
    cues: R,
    phase: Phase,
    session: GameSession,
    start_released: bool,
}

impl<L, D, A, T, R> GameController<L, D, A, T, R>
where
    L: PeripheralLink,
    D: CharDisplay,
    A: Actuator,
    T: Timebase,
    R: CueSource,
{
    /// Create an idle controller
    pub fn new(link: L, display: D, actuator: A, time: T, cues: R) -> Self {
        let now = time.now_ms();
        Self {
            link,
            display,
            actuator,
            time,
            cues,
            phase: Phase::Idle,
            session: GameSession::start(now),
            start_released: true,
        }
    }

    /// Power-on sequence: gauge at rest, welcome screen
    pub fn boot(&mut self) {
        self.actuator.write(ServoAngle::ZERO);
        Screen::Welcome.render(&mut self.display);
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The live session, if a game is in progress
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        match self.phase {
            Phase::Idle | Phase::Starting => None,
            Phase::Playing | Phase::Ending => Some(&self.session),
        }
    }

    /// Peripheral link
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Actuator
    pub fn actuator_mut(&mut self) -> &mut A {
        &mut self.actuator
    }

    /// Timebase
    pub fn timebase_mut(&mut self) -> &mut T {
        &mut self.time
    }

    /// Run one loop iteration
    pub fn poll<S: StartTrigger>(&mut self, start: &mut S) -> Events {
        let mut events = Events::new();

        match self.phase {
            Phase::Idle => {
                if self.start_requested(start) {
                    emit(&mut events, GameEvent::StartAccepted);
                    self.phase = Phase::Starting;
                }
            }
            Phase::Starting => {
                self.begin_game(&mut events);
                self.phase = Phase::Playing;
            }
            Phase::Playing => {
                let now = self.time.now_ms();
                self.play_tick(now, &mut events);
                if self.session.game_over(now) {
                    self.phase = Phase::Ending;
                }
            }
            Phase::Ending => {
                self.finish_game(&mut events);
                self.phase = Phase::Idle;
            }
        }

        events
    }

    /// Released-to-pressed edge that is still pressed after the settle delay.
    /// Contact bounce longer than the settle delay can still cause a false start.
    fn start_requested<S: StartTrigger>(&mut self, start: &mut S) -> bool {
        let pressed = start.is_pressed();
        let edge = pressed && self.start_released;
        self.start_released = !pressed;
        if !edge {
            return false;
        }

        self.time.pause_ms(START_SETTLE_MS);
        let held = start.is_pressed();
        self.start_released = !held;
        held
    }

    fn begin_game(&mut self, events: &mut Events) {
        self.session = GameSession::start(self.time.now_ms());
        self.actuator.write(ServoAngle::ZERO);

        Screen::GameStart.render(&mut self.display);
        self.time.pause_ms(START_BANNER_MS);
        Screen::Scores(self.session.scores()).render(&mut self.display);
        emit(events, GameEvent::Started);

        let color = self.cues.next_color();
        self.activate_round(color, events);
    }

    fn play_tick(&mut self, now: u64, events: &mut Events) {
        if self.session.round_expired(now) {
            self.deactivate(events);
            self.session.advance_turn(now);
            let color = self.cues.next_color();
            self.activate_round(color, events);
        }

        if self.session.awaiting_response() {
            match self.link.probe() {
                Ok(byte) => match Rating::from_byte(byte) {
                    Some(rating) => self.credit(rating, events),
                    None if byte != PROBE => emit(events, GameEvent::ReplyIgnored(byte)),
                    None => {}
                },
                Err(err) => emit(events, GameEvent::LinkFault(err)),
            }
        }

        self.actuator.write(self.session.gauge(now));
    }

    fn credit(&mut self, rating: Rating, events: &mut Events) {
        if let Some(award) = self.session.apply_rating(rating) {
            Screen::Scores(self.session.scores()).render(&mut self.display);
            emit(events, GameEvent::Scored(award));
        }
    }

    /// Send the cue for the active player, show it, and wait for a reply
    fn activate_round(&mut self, color: CueColor, events: &mut Events) {
        let cue = self.session.open_round(color);
        if let Err(err) = self.link.send_command(Command::Activate(cue)) {
            emit(events, GameEvent::LinkFault(err));
        }
        Screen::Turn(cue).render(&mut self.display);
        emit(events, GameEvent::RoundStarted(cue));
    }

    fn deactivate(&mut self, events: &mut Events) {
        if let Err(err) = self.link.deactivate_all() {
            emit(events, GameEvent::LinkFault(err));
        }
    }

    fn finish_game(&mut self, events: &mut Events) {
        self.deactivate(events);
        self.actuator.write(ServoAngle::ZERO);

        let scores = self.session.scores();
        let outcome = scores.outcome();
        Screen::Result(outcome, scores).render(&mut self.display);
        self.time.pause_ms(WINNER_DWELL_MS);
        Screen::PressStart.render(&mut self.display);

        emit(
            events,
            GameEvent::Finished {
                scores,
                outcome,
                rounds_played: self.session.rounds_played(),
                rounds_answered: self.session.rounds_answered(),
            },
        );
        self.session = GameSession::start(self.time.now_ms());
    }
}

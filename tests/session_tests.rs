//! Game Session Tests
//!
//! Round timing, turn alternation and score attribution rules.
//! Run with: cargo test --no-default-features --features std --test session_tests

use proptest::prelude::*;

use reflex_firmware::config::{GAME_DURATION_MS, ROUND_DURATION_MS};
use reflex_firmware::game::cue::CueRng;
use reflex_firmware::game::io::CueSource;
use reflex_firmware::game::session::GameSession;
use reflex_firmware::types::{CueColor, Player, Rating, ServoAngle};

// ============================================================================
// Start State
// ============================================================================

#[test]
fn start_resets_everything() {
    let session = GameSession::start(1_000);
    assert_eq!(session.scores().player1, 0);
    assert_eq!(session.scores().player2, 0);
    assert_eq!(session.active(), Player::One);
    assert!(!session.awaiting_response());
    assert_eq!(session.game_started_ms(), 1_000);
    assert_eq!(session.round_started_ms(), 1_000);
    assert_eq!(session.rounds_played(), 0);
}

#[test]
fn open_round_assigns_active_player() {
    let mut session = GameSession::start(0);
    let cue = session.open_round(CueColor::Blue);
    assert_eq!(cue.player, Player::One);
    assert_eq!(cue.color, CueColor::Blue);
    assert!(session.awaiting_response());
    assert_eq!(session.rounds_played(), 1);
}

// ============================================================================
// Timing
// ============================================================================

#[test]
fn round_expires_at_duration() {
    let session = GameSession::start(500);
    assert!(!session.round_expired(500 + ROUND_DURATION_MS - 1));
    assert!(session.round_expired(500 + ROUND_DURATION_MS));
}

#[test]
fn game_over_at_duration() {
    let session = GameSession::start(500);
    assert!(!session.game_over(500 + GAME_DURATION_MS - 1));
    assert!(session.game_over(500 + GAME_DURATION_MS));
}

#[test]
fn elapsed_saturates_before_start() {
    let session = GameSession::start(5_000);
    assert_eq!(session.game_elapsed_ms(4_000), 0);
    assert_eq!(session.round_elapsed_ms(4_000), 0);
    assert_eq!(session.gauge(4_000), ServoAngle::ZERO);
}

#[test]
fn advance_turn_restarts_round_clock() {
    let mut session = GameSession::start(0);
    session.open_round(CueColor::Red);
    assert_eq!(session.advance_turn(3_000), Player::Two);
    assert_eq!(session.round_started_ms(), 3_000);
    assert!(!session.round_expired(5_999));
    assert!(session.round_expired(6_000));
    // Game clock untouched
    assert_eq!(session.game_started_ms(), 0);
}

// ============================================================================
// Turn Alternation
// ============================================================================

#[test]
fn turns_alternate_strictly() {
    let mut session = GameSession::start(0);
    let mut owners = vec![session.open_round(CueColor::Red).player];
    for round in 1..10u64 {
        session.advance_turn(round * ROUND_DURATION_MS);
        owners.push(session.open_round(CueColor::Green).player);
    }
    for pair in owners.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    assert_eq!(owners[0], Player::One);
    assert_eq!(owners[9], Player::Two);
}

// ============================================================================
// Scoring
// ============================================================================

#[test]
fn rating_credits_cue_owner() {
    let mut session = GameSession::start(0);
    session.open_round(CueColor::Red);
    let award = session.apply_rating(Rating::Mid).unwrap();
    assert_eq!(award.player, Player::One);
    assert_eq!(award.points, 25);
    assert_eq!(session.scores().player1, 25);
    assert_eq!(session.scores().player2, 0);
    assert!(!session.awaiting_response());
    assert_eq!(session.rounds_answered(), 1);
}

#[test]
fn second_rating_in_same_round_is_dropped() {
    let mut session = GameSession::start(0);
    session.open_round(CueColor::Red);
    assert!(session.apply_rating(Rating::Best).is_some());
    assert!(session.apply_rating(Rating::Best).is_none());
    assert_eq!(session.scores().player1, 50);
}

#[test]
fn rating_after_turn_change_is_dropped() {
    let mut session = GameSession::start(0);
    session.open_round(CueColor::Red);
    session.advance_turn(ROUND_DURATION_MS);

    assert!(session.apply_rating(Rating::Best).is_none());
    assert_eq!(session.scores().total(), 0);
}

#[test]
fn miss_clears_wait_with_zero_points() {
    let mut session = GameSession::start(0);
    session.open_round(CueColor::Blue);
    let award = session.apply_rating(Rating::Miss).unwrap();
    assert_eq!(award.points, 0);
    assert!(!session.awaiting_response());
    assert_eq!(session.scores().total(), 0);
}

#[test]
fn unanswered_round_scores_zero() {
    let mut session = GameSession::start(0);
    session.open_round(CueColor::Red);
    session.advance_turn(ROUND_DURATION_MS);
    session.open_round(CueColor::Red);
    session.apply_rating(Rating::Low);

    assert_eq!(session.scores().player1, 0);
    assert_eq!(session.scores().player2, 10);
    assert_eq!(session.rounds_played(), 2);
    assert_eq!(session.rounds_answered(), 1);
}

// ============================================================================
// Countdown Gauge
// ============================================================================

#[test]
fn gauge_endpoints() {
    let session = GameSession::start(2_000);
    assert_eq!(session.gauge(2_000), ServoAngle::ZERO);
    assert_eq!(session.gauge(2_000 + GAME_DURATION_MS / 2).degrees(), 90);
    assert_eq!(session.gauge(2_000 + GAME_DURATION_MS), ServoAngle::MAX);
}

proptest! {
    #[test]
    fn gauge_is_monotonic(start in 0u64..1_000_000, a in 0u64..40_000, b in 0u64..40_000) {
        let session = GameSession::start(start);
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(session.gauge(start + early) <= session.gauge(start + late));
    }

    #[test]
    fn gauge_is_linear(elapsed in 0u64..30_000) {
        let session = GameSession::start(0);
        let expected = elapsed * 180 / GAME_DURATION_MS;
        prop_assert_eq!(u64::from(session.gauge(elapsed).degrees()), expected);
    }
}

// ============================================================================
// Cue Generator
// ============================================================================

#[test]
fn cue_rng_is_deterministic_per_seed() {
    let mut a = CueRng::new(1234);
    let mut b = CueRng::new(1234);
    for _ in 0..32 {
        assert_eq!(a.next_color(), b.next_color());
    }
}

#[test]
fn cue_rng_zero_seed_still_runs() {
    let mut rng = CueRng::new(0);
    let first = rng.next_u32();
    assert_ne!(first, 0);
    assert_ne!(rng.next_u32(), first);
}

#[test]
fn cue_rng_produces_every_color() {
    let mut rng = CueRng::new(42);
    let mut seen = [0usize; 3];
    for _ in 0..3_000 {
        match rng.next_color() {
            CueColor::Red => seen[0] += 1,
            CueColor::Green => seen[1] += 1,
            CueColor::Blue => seen[2] += 1,
        }
    }
    // Roughly uniform: each color well within a third +/- 10%
    for count in seen {
        assert!((700..=1_300).contains(&count), "{seen:?}");
    }
}

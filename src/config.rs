//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the reflex game master unit.
//! All timing, pin mappings, and peripheral parameters are centralized here.

/// Length of one round (one player's turn) in milliseconds
pub const ROUND_DURATION_MS: u64 = 3_000;

/// Length of a whole game in milliseconds
pub const GAME_DURATION_MS: u64 = 30_000;

/// Number of full rounds in a game
pub const ROUNDS_PER_GAME: u64 = GAME_DURATION_MS / ROUND_DURATION_MS;

/// Servo angle at the end of the countdown gauge (degrees)
pub const SERVO_MAX_ANGLE: u8 = 180;

/// Settle delay after the start button reads pressed
pub const START_SETTLE_MS: u32 = 200;

/// How long the "Game Start!" banner stays up
pub const START_BANNER_MS: u32 = 1_000;

/// How long the end-of-game result stays up
pub const WINNER_DWELL_MS: u32 = 5_000;

/// Points for a best-grade reply
pub const POINTS_BEST: u16 = 50;

/// Points for a mid-grade reply
pub const POINTS_MID: u16 = 25;

/// Points for a low-grade reply
pub const POINTS_LOW: u16 = 10;

/// Points for a miss
pub const POINTS_MISS: u16 = 0;

/// Character display columns
pub const LCD_COLUMNS: usize = 16;

/// Character display rows
pub const LCD_ROWS: usize = 2;

/// SPI clock to the cue peripheral
pub const BUS_FREQUENCY_HZ: u32 = 1_000_000;

/// Servo PWM frame rate
pub const SERVO_PWM_HZ: u32 = 50;

/// Servo PWM frame period in microseconds
pub const SERVO_FRAME_US: u32 = 1_000_000 / SERVO_PWM_HZ;

/// Pulse width at 0 degrees (microseconds)
pub const SERVO_MIN_PULSE_US: u32 = 544;

/// Pulse width at 180 degrees (microseconds)
pub const SERVO_MAX_PULSE_US: u32 = 2_400;

/// Fallback seed for the cue generator when the hardware RNG fails
pub const CUE_SEED_FALLBACK: u32 = 0x2545_F491;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the wiring harness

    /// Start button (active low, internal pull-up)
    pub const START_BUTTON: &str = "PA1";

    /// Servo PWM output (TIM2 CH1)
    pub const SERVO: &str = "PA0";

    /// SPI1 SCK to cue peripheral
    pub const BUS_SCK: &str = "PA5";

    /// SPI1 MISO from cue peripheral
    pub const BUS_MISO: &str = "PA6";

    /// SPI1 MOSI to cue peripheral
    pub const BUS_MOSI: &str = "PA7";

    /// Cue peripheral select (active low)
    pub const BUS_SELECT: &str = "PA4";

    /// LCD register select
    pub const LCD_RS: &str = "PB0";

    /// LCD enable strobe
    pub const LCD_EN: &str = "PB1";

    /// LCD data bit 4
    pub const LCD_D4: &str = "PB2";

    /// LCD data bit 5
    pub const LCD_D5: &str = "PB3";

    /// LCD data bit 6
    pub const LCD_D6: &str = "PB4";

    /// LCD data bit 7
    pub const LCD_D7: &str = "PB5";
}

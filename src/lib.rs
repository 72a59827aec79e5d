//! Reflex Game Master Firmware Library
//!
//! Core functionality for the master unit of a two-player reflex game.
//! The master drives a 16x2 character display and a servo countdown gauge,
//! and exchanges single-byte commands and ratings with a cue peripheral
//! over SPI.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │      Game Controller  │  Session  │  Screens                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    PROTOCOL LAYER                            │
//! │      Command table  │  Rating decode  │  Bus link            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │  SPI  │  Servo PWM  │  HD44780 LCD  │  GPIO  │  Timebase     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (single main task)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Functional core, imperative shell**: session rules are pure, the
//!   controller talks to hardware only through the traits in [`game::io`]
//! - **Type-driven design**: players, colors, ratings and commands are
//!   closed enums with explicit wire tables
//! - **No unsafe in application code**
//! - **Explicit error handling**: link failures are typed and reported

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// STM32G474 bindings for the game's collaborator traits.
#[cfg(feature = "embedded")]
pub mod hal;

/// Peripheral Drivers
///
/// HD44780 character LCD.
#[cfg(feature = "embedded")]
pub mod drivers;

/// Game Logic
///
/// Session rules, peripheral link, and the controller state machine.
pub mod game;

/// User Interface
///
/// Screen text layout for the character display.
pub mod ui;

/// Cue Peripheral Protocol
///
/// Command table and reply decoding.
pub mod protocol;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Collaborator traits
    pub use crate::game::io::{
        Actuator, CharDisplay, CueSource, PeripheralLink, StartTrigger, Timebase,
    };

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}

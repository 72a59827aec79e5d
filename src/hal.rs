//! Hardware Abstraction Layer
//!
//! Binds STM32G474 peripherals to the game's collaborator traits.

pub mod gpio;
pub mod pwm;
pub mod spi;
pub mod timer;

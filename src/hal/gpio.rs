//! GPIO Abstractions
//!
//! Type-safe GPIO pin wrappers for the reflex game master unit.

use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::Peripheral;

use crate::game::io::StartTrigger;

/// Start button (active low with internal pull-up)
pub struct StartButton<'d> {
    pin: Input<'d>,
}

impl<'d> StartButton<'d> {
    /// Configure the pin as a pulled-up input
    #[must_use]
    pub fn new(pin: impl Peripheral<P = impl embassy_stm32::gpio::Pin> + 'd) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }
}

impl StartTrigger for StartButton<'_> {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low()
    }
}

/// Push-pull output starting low, for LCD lines
#[must_use]
pub fn lcd_line<'d>(pin: impl Peripheral<P = impl embassy_stm32::gpio::Pin> + 'd) -> Output<'d> {
    Output::new(pin, Level::Low, Speed::Low)
}

/// Select line for the cue peripheral, parked high (unselected)
#[must_use]
pub fn select_line<'d>(pin: impl Peripheral<P = impl embassy_stm32::gpio::Pin> + 'd) -> Output<'d> {
    Output::new(pin, Level::High, Speed::VeryHigh)
}

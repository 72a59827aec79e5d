//! SPI Bus Setup
//!
//! Blocking SPI1 master to the cue peripheral. Mode 0, MSB first.
//! Select framing is done in software by [`crate::game::link::BusLink`].

use embassy_stm32::spi;
use embassy_stm32::time::Hertz;

use crate::config::BUS_FREQUENCY_HZ;

/// Bus configuration for the cue peripheral
#[must_use]
pub fn bus_config() -> spi::Config {
    let mut config = spi::Config::default();
    config.frequency = Hertz(BUS_FREQUENCY_HZ);
    config.mode = spi::MODE_0;
    config.bit_order = spi::BitOrder::MsbFirst;
    config
}

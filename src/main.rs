//! Reflex Game Main Application
//!
//! Entry point for the STM32G474-based reflex game master unit.
//! Wires the peripherals to the game controller and runs the control loop.

#![no_std]
#![no_main]

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_stm32::gpio::OutputType;
use embassy_stm32::rng::{self, Rng};
use embassy_stm32::spi::Spi;
use embassy_stm32::time::hz;
use embassy_stm32::timer::low_level::CountingMode;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_stm32::{bind_interrupts, peripherals};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use reflex_firmware::drivers::lcd::Lcd;
use reflex_firmware::game::controller::{GameController, GameEvent};
use reflex_firmware::game::cue::CueRng;
use reflex_firmware::game::link::BusLink;
use reflex_firmware::hal::gpio::{lcd_line, select_line, StartButton};
use reflex_firmware::hal::pwm::ServoPwm;
use reflex_firmware::hal::spi::bus_config;
use reflex_firmware::hal::timer::SystemTimebase;
use reflex_firmware::prelude::*;

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Reflex Game Firmware v{}", env!("CARGO_PKG_VERSION"));

    // HSI48 clocks the RNG
    let mut config = embassy_stm32::Config::default();
    config.rcc.hsi48 = Some(Default::default());
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    let mut rng = Rng::new(p.RNG, Irqs);
    let mut seed_bytes = [0u8; 4];
    let seed = match rng.async_fill_bytes(&mut seed_bytes).await {
        Ok(()) => u32::from_le_bytes(seed_bytes),
        Err(_) => {
            warn!("RNG seed failed, using fallback");
            CUE_SEED_FALLBACK
        }
    };

    // SPI1: PA5 = SCK, PA7 = MOSI, PA6 = MISO, PA4 = select
    let spi = Spi::new_blocking(p.SPI1, p.PA5, p.PA7, p.PA6, bus_config());
    let link = defmt::unwrap!(BusLink::new(spi, select_line(p.PA4)));

    info!("Cue bus initialized at {}Hz", BUS_FREQUENCY_HZ);

    // TIM2 CH1 on PA0 drives the gauge servo
    let pwm = SimplePwm::new(
        p.TIM2,
        Some(PwmPin::new_ch1(p.PA0, OutputType::PushPull)),
        None,
        None,
        None,
        hz(SERVO_PWM_HZ),
        CountingMode::EdgeAlignedUp,
    );
    let mut servo_channel = pwm.split().ch1;
    servo_channel.enable();
    let servo = ServoPwm::attach(servo_channel);

    let lcd = Lcd::new(
        lcd_line(p.PB0),
        lcd_line(p.PB1),
        [
            lcd_line(p.PB2),
            lcd_line(p.PB3),
            lcd_line(p.PB4),
            lcd_line(p.PB5),
        ],
        Delay,
    );

    let mut start = StartButton::new(p.PA1);

    let mut controller =
        GameController::new(link, lcd, servo, SystemTimebase::new(), CueRng::new(seed));
    controller.boot();

    info!("Ready, press start");

    loop {
        for event in controller.poll(&mut start) {
            log_event(&event);
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::ReplyIgnored(_) => debug!("{}", event),
        GameEvent::LinkFault(_) => warn!("{}", event),
        _ => info!("{}", event),
    }
}

//! Timer Abstractions
//!
//! Millisecond timebase for round and game timing, and the blocking
//! pacing pauses used by the control loop.

use embassy_time::{block_for, Duration, Instant};

use crate::game::io::Timebase;

/// Timebase on the embassy time driver
#[derive(Clone, Copy, Debug)]
pub struct SystemTimebase {
    boot: Instant,
}

impl SystemTimebase {
    /// Start counting from now
    #[must_use]
    pub fn new() -> Self {
        Self {
            boot: Instant::now(),
        }
    }

    /// Time since this timebase was created
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Instant::now() - self.boot
    }
}

impl Default for SystemTimebase {
    fn default() -> Self {
        Self::new()
    }
}

impl Timebase for SystemTimebase {
    fn now_ms(&self) -> u64 {
        self.elapsed().as_millis()
    }

    fn pause_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}

impl defmt::Format for SystemTimebase {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Timebase(+{}ms)", self.elapsed().as_millis());
    }
}

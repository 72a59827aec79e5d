//! Round color generator.
//!
//! Xorshift32 seeded once at boot from the hardware RNG.

use super::io::CueSource;
use crate::config::CUE_SEED_FALLBACK;
use crate::types::CueColor;

/// Xorshift32 pseudo-random color source
#[derive(Clone, Copy, Debug)]
pub struct CueRng {
    state: u32,
}

impl CueRng {
    /// Create from a seed; zero (a fixed point of xorshift) is replaced
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { CUE_SEED_FALLBACK } else { seed };
        Self { state }
    }

    /// Next raw 32-bit value
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl CueSource for CueRng {
    fn next_color(&mut self) -> CueColor {
        // Upper bits of xorshift are better mixed than the low ones
        CueColor::from_random(self.next_u32() >> 8)
    }
}

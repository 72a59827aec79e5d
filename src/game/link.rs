//! SPI Bus Link
//!
//! Master side of the cue peripheral exchange. A command is framed by the
//! select line; the reply is read by a separate probe transfer clocked
//! after select is released, so every command send doubles as a poll.
//!
//! There is no acknowledgement, checksum, or retry. A reply byte may be
//! stale: the peripheral returns whatever it last loaded.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::io::{LinkError, LinkResult, PeripheralLink};
use crate::protocol::{Command, PROBE};

/// Select line that is released when the frame guard drops
struct Selected<'a, CS: OutputPin> {
    cs: &'a mut CS,
}

impl<'a, CS: OutputPin> Selected<'a, CS> {
    fn assert(cs: &'a mut CS) -> LinkResult<Self> {
        cs.set_low().map_err(|_| LinkError::Select)?;
        Ok(Self { cs })
    }
}

impl<CS: OutputPin> Drop for Selected<'_, CS> {
    fn drop(&mut self) {
        let _ = self.cs.set_high();
    }
}

/// Cue peripheral link over a raw SPI bus and a manual select pin
pub struct BusLink<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> BusLink<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// Create the link and park the select line high (unselected)
    pub fn new(spi: SPI, mut cs: CS) -> LinkResult<Self> {
        cs.set_high().map_err(|_| LinkError::Select)?;
        Ok(Self { spi, cs })
    }

    /// Release the bus and select pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> PeripheralLink for BusLink<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    fn transmit(&mut self, command: Command) -> LinkResult<()> {
        let _frame = Selected::assert(&mut self.cs)?;
        for &byte in command.as_bytes() {
            let mut word = [byte];
            self.spi
                .transfer_in_place(&mut word)
                .map_err(|_| LinkError::Bus)?;
        }
        self.spi.flush().map_err(|_| LinkError::Bus)
    }

    fn probe(&mut self) -> LinkResult<u8> {
        let mut word = [PROBE];
        self.spi
            .transfer_in_place(&mut word)
            .map_err(|_| LinkError::Bus)?;
        self.spi.flush().map_err(|_| LinkError::Bus)?;
        Ok(word[0])
    }
}

//! Tick dividers derive slow, periodic step strobes from the shared tick.
//!
//! The SAR and ramp engines are paced by dividers rather than separate
//! clocks: every component still advances on the shared tick, but only acts
//! on ticks where its divider strobes.
use crate::Error;

/// A counted sub-tick gate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickDivider {
    ratio: u32,
    count: u32,
}

impl TickDivider {
    /// Construct a divider.
    ///
    /// # Args
    /// * `ratio` - Number of shared ticks per strobe. Must be nonzero.
    pub fn new(ratio: u32) -> Result<Self, Error> {
        if ratio == 0 {
            return Err(Error::Divider);
        }
        Ok(Self { ratio, count: 0 })
    }

    /// Advance by one shared tick.
    ///
    /// # Returns
    /// True on the last tick of every `ratio` ticks.
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count == self.ratio {
            self.count = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

//! Conversion strategy selection
//!
//! # Design
//! Each converted channel owns one SAR and one ramp engine sharing the
//! channel's comparator. Both engines advance on every tick so that their
//! state stays continuous, but only the selected engine is enabled and only
//! its drive code and results are forwarded.
//!
//! On a strategy change the deselected engine is aborted: a SAR conversion in
//! flight is dropped, since its comparator samples would no longer reflect
//! its own trial codes. While deselected an engine sees `enable = false` and
//! stays idle (SAR) or at zero (ramp). Reselecting an engine therefore always
//! restarts it from a fresh conversion. Latched results survive.
use serde::{Deserialize, Serialize};

use crate::ramp::{Ramp, RampConfig};
use crate::sar::{Sar, SarConfig};
use crate::Error;

/// The outputs of a conversion engine for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Code driven onto the ladder or PWM during the next tick.
    pub trial: u16,
    /// Latest completed conversion.
    pub result: u16,
    /// A new `result` was latched on this tick.
    pub done: bool,
}

/// A comparator-driven conversion engine.
pub trait ConversionEngine {
    /// Advance by one shared tick.
    ///
    /// # Args
    /// * `enable` - Allow a new conversion to start.
    /// * `comparator` - The input exceeds the trial code driven during this tick.
    fn tick(&mut self, enable: bool, comparator: bool) -> Conversion;

    /// Latest completed conversion.
    fn result(&self) -> u16;

    /// Drop any conversion in flight and idle, keeping the latest result.
    fn abort(&mut self);

    /// Return to the idle state with all registers cleared.
    fn reset(&mut self);
}

/// Conversion strategy of a channel.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::IntoStaticStr,
)]
pub enum Strategy {
    /// Successive approximation
    #[default]
    Sar,
    /// Free running ramp with edge capture
    Ramp,
}

/// Both engines of one channel.
#[derive(Clone, Debug)]
pub struct Converter {
    sar: Sar,
    ramp: Ramp,
    strategy: Strategy,
}

impl Converter {
    pub fn new(sar: SarConfig, ramp: RampConfig) -> Result<Self, Error> {
        Ok(Self {
            sar: Sar::new(sar)?,
            ramp: Ramp::new(ramp)?,
            strategy: Strategy::default(),
        })
    }

    /// Advance both engines and forward the selected one.
    pub fn tick(
        &mut self,
        strategy: Strategy,
        enable: bool,
        comparator: bool,
    ) -> Conversion {
        if strategy != self.strategy {
            log::debug!(
                "Strategy {} -> {}",
                <&'static str>::from(self.strategy),
                <&'static str>::from(strategy)
            );
            match self.strategy {
                Strategy::Sar => self.sar.abort(),
                Strategy::Ramp => self.ramp.abort(),
            }
            self.strategy = strategy;
        }
        let sar = self
            .sar
            .tick(enable && strategy == Strategy::Sar, comparator);
        let ramp = self
            .ramp
            .tick(enable && strategy == Strategy::Ramp, comparator);
        match strategy {
            Strategy::Sar => sar,
            Strategy::Ramp => ramp,
        }
    }

    pub fn result(&self, strategy: Strategy) -> u16 {
        match strategy {
            Strategy::Sar => self.sar.result(),
            Strategy::Ramp => self.ramp.result(),
        }
    }

    pub fn sar(&self) -> &Sar {
        &self.sar
    }

    pub fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    pub fn reset(&mut self) {
        self.sar.reset();
        self.ramp.reset();
        self.strategy = Strategy::default();
    }
}

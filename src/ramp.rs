//! Ramp (sawtooth) conversion engine
//!
//! # Design
//! A free running up-counter drives the ladder or PWM from zero to full scale
//! and wraps. The comparator is asserted while the input exceeds the driven
//! code; the code driven when the comparator deasserts is captured as the
//! conversion result. This assumes the ramp crosses the input once per
//! period in ascending order. An input at or below code zero, or above full
//! scale, never produces the falling edge and leaves the previous result in
//! place.
//!
//! While disabled the ramp is held at zero. The first tick after enabling
//! never captures since its comparator sample still reflects the previous
//! drive.
use dsp::{full_scale, EdgeDetector};
use miniconf::Tree;
use serde::{Deserialize, Serialize};

use crate::converter::{Conversion, ConversionEngine};
use crate::timers::TickDivider;
use crate::Error;

/// Ramp engine parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Tree, Serialize, Deserialize)]
pub struct RampConfig {
    /// Resolution in bits, 1 to 16.
    pub bits: u32,
    /// Shared ticks per ramp step.
    pub divider: u32,
}

impl RampConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(1..=16).contains(&self.bits) {
            return Err(Error::Width(self.bits));
        }
        if self.divider == 0 {
            return Err(Error::Divider);
        }
        Ok(())
    }

    /// Shared ticks per ramp period.
    pub fn period(&self) -> u32 {
        (1u32 << self.bits).saturating_mul(self.divider)
    }
}

#[derive(Clone, Debug)]
pub struct Ramp {
    max: u16,
    divider: TickDivider,
    code: u16,
    edge: EdgeDetector,
    armed: bool,
    result: u16,
}

impl Ramp {
    pub fn new(config: RampConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            max: full_scale(config.bits),
            divider: TickDivider::new(config.divider)?,
            code: 0,
            edge: EdgeDetector::default(),
            armed: false,
            result: 0,
        })
    }

    /// Currently driven ramp code.
    pub fn code(&self) -> u16 {
        self.code
    }
}

impl ConversionEngine for Ramp {
    fn tick(&mut self, enable: bool, comparator: bool) -> Conversion {
        let falling = self.edge.falling(comparator);
        if !enable {
            self.code = 0;
            self.divider.reset();
            self.armed = false;
            return Conversion {
                trial: 0,
                result: self.result,
                done: false,
            };
        }

        let done = falling && self.armed;
        if done {
            self.result = self.code;
            log::trace!("Ramp capture {:#x}", self.result);
        }
        self.armed = true;

        if self.divider.tick() {
            self.code = if self.code >= self.max {
                0
            } else {
                self.code + 1
            };
        }

        Conversion {
            trial: self.code,
            result: self.result,
            done,
        }
    }

    fn result(&self) -> u16 {
        self.result
    }

    fn abort(&mut self) {
        self.code = 0;
        self.divider.reset();
        self.armed = false;
    }

    fn reset(&mut self) {
        self.abort();
        self.edge = EdgeDetector::default();
        self.result = 0;
    }
}

//! Successive approximation conversion engine
//!
//! # Design
//! The engine resolves one bit per trial, most significant first, against an
//! external comparator that reports whether the input exceeds the trial code
//! currently driven onto the ladder. It is paced by a [TickDivider] so that
//! every state transition happens on a slow engine tick.
//!
//! The comparator is sampled `settle_ticks` engine ticks (at least one) after
//! the trial code changed, so every bit costs `max(settle_ticks, 1) + 1`
//! engine ticks. A disable request only takes effect in [State::Done]; a
//! conversion in flight always completes. Only [ConversionEngine::abort] and
//! [ConversionEngine::reset] cut it short.
use miniconf::Tree;
use serde::{Deserialize, Serialize};

use crate::converter::{Conversion, ConversionEngine};
use crate::timers::TickDivider;
use crate::Error;

/// SAR engine parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Tree, Serialize, Deserialize)]
pub struct SarConfig {
    /// Resolution in bits, 1 to 16.
    pub bits: u32,
    /// Minimum engine ticks between a trial change and the comparator sample.
    pub settle_ticks: u32,
    /// Shared ticks per engine tick.
    pub divider: u32,
}

impl SarConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(1..=16).contains(&self.bits) {
            return Err(Error::Width(self.bits));
        }
        if self.divider == 0 {
            return Err(Error::Divider);
        }
        Ok(())
    }

    /// Engine ticks spent in [State::WaitSettle] per bit.
    fn wait_ticks(&self) -> u32 {
        self.settle_ticks.saturating_sub(1)
    }

    /// Shared ticks between consecutive results in continuous conversion.
    ///
    /// One `Init` and one `Done` tick per conversion plus `SetBit`, the
    /// settle wait and `Sample` per bit.
    pub fn conversion_ticks(&self) -> u32 {
        self.bits
            .saturating_mul(self.wait_ticks().saturating_add(2))
            .saturating_add(2)
            .saturating_mul(self.divider)
    }
}

/// Engine states.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::IntoStaticStr)]
pub enum State {
    #[default]
    Idle,
    Init,
    SetBit,
    WaitSettle,
    Sample,
    Done,
}

#[derive(Clone, Debug)]
pub struct Sar {
    config: SarConfig,
    divider: TickDivider,
    state: State,
    trial: u16,
    bit: u32,
    settle: u32,
    result: u16,
}

impl Sar {
    /// Construct an idle engine.
    ///
    /// # Args
    /// * `config` - Resolution, settle time and pacing.
    pub fn new(config: SarConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            divider: TickDivider::new(config.divider)?,
            state: State::Idle,
            trial: 0,
            bit: 0,
            settle: 0,
            result: 0,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn config(&self) -> &SarConfig {
        &self.config
    }

    /// Advance by one engine tick.
    ///
    /// # Returns
    /// True if a result was latched.
    fn step(&mut self, enable: bool, comparator: bool) -> bool {
        match self.state {
            State::Idle => {
                if enable {
                    self.state = State::Init;
                }
            }
            State::Init => {
                self.trial = 0;
                self.bit = self.config.bits - 1;
                self.state = State::SetBit;
            }
            State::SetBit => {
                self.trial |= 1 << self.bit;
                self.settle = 0;
                self.state = if self.config.wait_ticks() == 0 {
                    State::Sample
                } else {
                    State::WaitSettle
                };
            }
            State::WaitSettle => {
                self.settle += 1;
                if self.settle >= self.config.wait_ticks() {
                    self.state = State::Sample;
                }
            }
            State::Sample => {
                if !comparator {
                    self.trial &= !(1 << self.bit);
                }
                if self.bit == 0 {
                    self.result = self.trial;
                    self.state = State::Done;
                    log::trace!("SAR result {:#x}", self.result);
                    return true;
                }
                self.bit -= 1;
                self.state = State::SetBit;
            }
            State::Done => {
                self.state = if enable { State::Init } else { State::Idle };
            }
        }
        false
    }
}

impl ConversionEngine for Sar {
    fn tick(&mut self, enable: bool, comparator: bool) -> Conversion {
        let done = self.divider.tick() && self.step(enable, comparator);
        Conversion {
            trial: self.trial,
            result: self.result,
            done,
        }
    }

    fn result(&self) -> u16 {
        self.result
    }

    fn abort(&mut self) {
        self.divider.reset();
        self.state = State::Idle;
        self.trial = 0;
        self.bit = 0;
        self.settle = 0;
    }

    fn reset(&mut self) {
        self.abort();
        self.result = 0;
    }
}

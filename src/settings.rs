//! Front-end settings
//!
//! # Design
//! Settings come in two kinds:
//! 1. Static configuration ([Config]), applied once when the front-end is
//!    constructed: conversion resolution and pacing, scaling and calibration
//!    width.
//! 2. Run-time settings ([Settings]), the switch and selector levels that are
//!    sampled on every tick: mode code, calibration enable, conversion
//!    strategies.
//!
//! Both are `miniconf` trees and serde (JSON) serializable so they can be
//! inspected and changed per path.
use arbitrary_int::{u4, Number};
use dsp::Scaler;
use miniconf::Tree;
use serde::{Deserialize, Serialize};

use crate::converter::Strategy;
use crate::design_parameters::{
    CHANNEL_BITS, FULL_SCALE_MV, MEASUREMENT_BITS, RAMP_CLK_DIV,
    REFERENCE_BITS, SAR_CLK_DIV, SAR_SETTLE_TICKS,
};
use crate::frontend::Inputs;
use crate::ramp::RampConfig;
use crate::sar::SarConfig;
use crate::Error;

#[derive(Clone, Debug, PartialEq, Tree, Serialize, Deserialize)]
pub struct Config {
    /// SAR engine, shared by both converted channels.
    pub sar: SarConfig,
    /// Ramp engine, shared by both converted channels.
    pub ramp: RampConfig,
    /// Scaling of the reference, channel A and channel B averages.
    #[tree(with=miniconf::leaf)]
    pub scale: [Scaler; 3],
    /// Width of the calibrated output.
    pub calibration_bits: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sar: SarConfig {
                bits: CHANNEL_BITS,
                settle_ticks: SAR_SETTLE_TICKS,
                divider: SAR_CLK_DIV,
            },
            ramp: RampConfig {
                bits: CHANNEL_BITS,
                divider: RAMP_CLK_DIV,
            },
            scale: [
                Scaler::new(FULL_SCALE_MV, REFERENCE_BITS),
                Scaler::new(FULL_SCALE_MV, CHANNEL_BITS),
                Scaler::new(FULL_SCALE_MV, CHANNEL_BITS),
            ],
            calibration_bits: MEASUREMENT_BITS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        self.sar.validate()?;
        self.ramp.validate()?;
        if !(1..=16).contains(&self.calibration_bits) {
            return Err(Error::Width(self.calibration_bits));
        }
        let bits = self.sar.bits.max(self.ramp.bits);
        for (scaler, bits) in self.scale.iter().zip([REFERENCE_BITS, bits, bits])
        {
            if !scaler.check(bits) {
                return Err(Error::Scale {
                    gain: scaler.gain,
                    shift: scaler.shift,
                    bits,
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Tree, Serialize, Deserialize)]
pub struct Settings {
    /// Display mode code, 0 to 15.
    pub mode: u8,
    /// Output calibrated values.
    pub calibrate: bool,
    /// Conversion strategy of channel A and B.
    #[tree(with=miniconf::leaf)]
    pub strategy: [Strategy; 2],
    /// Stop starting new conversions.
    pub hold: bool,
}

impl Settings {
    pub fn mode_code(&self) -> Result<u4, Error> {
        if self.mode > u4::MAX.value() {
            return Err(Error::Mode(self.mode));
        }
        Ok(u4::new(self.mode))
    }

    /// Apply the settings to the next tick's inputs.
    pub fn apply(&self, inputs: &mut Inputs) -> Result<(), Error> {
        inputs.mode = self.mode_code()?;
        inputs.calibrate = self.calibrate;
        inputs.strategy = self.strategy;
        inputs.enable = !self.hold;
        Ok(())
    }
}

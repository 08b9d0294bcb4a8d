use serde::{Deserialize, Serialize};

use crate::design_parameters::FULL_SCALE_MV;

/// A scaled measurement in millivolts, as produced by the scaler and the
/// calibration stage.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Millivolts(pub u16);

impl From<u16> for Millivolts {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Millivolts> for u16 {
    fn from(mv: Millivolts) -> u16 {
        mv.0
    }
}

impl From<Millivolts> for f32 {
    /// Convert to volts.
    fn from(mv: Millivolts) -> f32 {
        mv.0 as f32 / 1000.
    }
}

/// A raw converter code of a given width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Code {
    pub value: u16,
    pub bits: u32,
}

impl Code {
    pub const fn new(value: u16, bits: u32) -> Self {
        Self { value, bits }
    }

    /// Code nearest below an input level in volts, clamped to the code range.
    pub fn from_volts(volts: f32, bits: u32) -> Self {
        let lsb = (1u32 << bits) as f32 / (FULL_SCALE_MV as f32 * 1e-3);
        let max = ((1u32 << bits) - 1) as f32;
        Self::new((volts * lsb).clamp(0., max) as u16, bits)
    }
}

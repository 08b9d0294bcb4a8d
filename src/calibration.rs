//! Offset auto-calibration
//!
//! # Design
//! On a trigger pulse the signed difference between the trusted reference and
//! the channel (both scaled to the same units) is captured. Afterwards the
//! channel is either passed through or corrected by that offset, per the
//! calibration enable level. The corrected value saturates to the
//! representable range instead of wrapping.
//!
//! Capture and correction on the trigger tick use the same inputs, so the
//! corrected value equals the reference on that tick.
use dsp::{full_scale, saturate};

use crate::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AutoCalibrator {
    // Needs one bit more than the measurement width.
    offset: i32,
    max: u16,
}

impl AutoCalibrator {
    /// Construct a calibrator with zero offset.
    ///
    /// # Args
    /// * `bits` - Width of the corrected output, 1 to 16.
    pub fn new(bits: u32) -> Result<Self, Error> {
        if !(1..=16).contains(&bits) {
            return Err(Error::Width(bits));
        }
        Ok(Self {
            offset: 0,
            max: full_scale(bits),
        })
    }

    /// Process one tick.
    ///
    /// # Args
    /// * `trigger` - Capture a new offset on this tick.
    /// * `enable` - Output the corrected instead of the raw channel value.
    /// * `reference` - Trusted reference, scaled.
    /// * `channel` - Channel value, scaled.
    ///
    /// # Returns
    /// The corrected or raw channel value.
    pub fn update(
        &mut self,
        trigger: bool,
        enable: bool,
        reference: u16,
        channel: u16,
    ) -> u16 {
        if trigger {
            self.offset = reference as i32 - channel as i32;
            log::info!(
                "Offset captured: {} (reference {reference}, channel {channel})",
                self.offset
            );
        }
        if enable {
            self.correct(channel)
        } else {
            channel
        }
    }

    /// Apply the held offset, saturating to `[0, max]`.
    pub fn correct(&self, channel: u16) -> u16 {
        saturate(channel as i32 + self.offset, self.max)
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

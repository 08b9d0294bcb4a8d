use serde::Serialize;

use crate::convert::Millivolts;
use crate::frontend::Output;
use crate::router::Readings;

/// The telemetry buffer is a snapshot of the pipeline registers.
///
/// # Note
/// Values are kept in machine units and only converted to SI units when the
/// telemetry is finalized for reporting.
#[derive(Copy, Clone, Debug, Default)]
pub struct TelemetryBuffer {
    /// Routable registers, channel scaled values as corrected.
    pub readings: Readings,
    /// Scaled channel values before correction.
    pub uncorrected: [u16; 2],
    /// Held calibration offsets in millivolts.
    pub offsets: [i32; 2],
    /// The latest front-end output.
    pub output: Output,
}

/// Telemetry as reported.
#[derive(Clone, Debug, Serialize)]
pub struct Telemetry {
    /// Raw codes of reference, channel A and channel B.
    pub raw: [u16; 3],
    /// Averaged codes of reference, channel A and channel B.
    pub average: [u16; 3],
    /// Scaled reference in volts.
    pub reference: f32,
    /// Scaled channel A/B before correction in volts.
    pub uncorrected: [f32; 2],
    /// Scaled channel A/B as output by the calibration stage in volts.
    pub corrected: [f32; 2],
    /// Calibration offsets in volts.
    pub offsets: [f32; 2],
    /// Live display value.
    pub value: u16,
    /// Live channel, if any.
    pub channel: Option<&'static str>,
    /// Live representation, if any.
    pub representation: Option<&'static str>,
}

impl TelemetryBuffer {
    /// Convert the telemetry buffer to finalized, SI-unit telemetry for reporting.
    pub fn finalize(self) -> Telemetry {
        let r = &self.readings;
        let volts = |mv: u16| f32::from(Millivolts(mv));
        Telemetry {
            raw: [r.reference.raw, r.channel_a.raw, r.channel_b.raw],
            average: [
                r.reference.average,
                r.channel_a.average,
                r.channel_b.average,
            ],
            reference: volts(r.reference.scaled),
            uncorrected: self.uncorrected.map(volts),
            corrected: [volts(r.channel_a.scaled), volts(r.channel_b.scaled)],
            offsets: self.offsets.map(|mv| mv as f32 / 1000.),
            value: self.output.value,
            channel: self.output.selection.channel.map(Into::into),
            representation: self
                .output
                .selection
                .representation
                .map(Into::into),
        }
    }
}

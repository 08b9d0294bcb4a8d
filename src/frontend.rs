//! Measurement front-end
//!
//! # Design
//! All components advance in lock-step on one shared tick. Within a tick the
//! router and the calibration engines read the registers as they stood at the
//! start of the tick; new conversions and reference samples are admitted
//! afterwards. Averaged and scaled values therefore always reflect earlier
//! ticks' raw samples, and an offset capture uses exactly the scaled values it
//! is applied to.
//!
//! Data flow per channel:
//! ```text
//! comparator -> Converter (SAR | ramp) -> Averager -> AutoCalibrator -+
//! reference strobe ---------------------> Averager -------------------+-> route -> value
//! ```
use arbitrary_int::u4;
use dsp::EdgeDetector;

use crate::average::Averager;
use crate::calibration::AutoCalibrator;
use crate::converter::{Converter, Strategy};
use crate::design_parameters::WINDOW;
use crate::mode::{ModeDecoder, Selection};
use crate::router::{route, ChannelReadings, Readings};
use crate::settings::Config;
use crate::telemetry::TelemetryBuffer;
use crate::trigger::Debouncer;
use crate::Error;

/// One sample of the trusted reference collaborator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceSample {
    /// Raw 16 bit code.
    pub code: u16,
    /// Data ready strobe. A new sample is admitted on its rising edge.
    pub ready: bool,
}

/// External inputs sampled on one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Inputs {
    /// Allow new conversions on both converted channels.
    pub enable: bool,
    /// Comparator outputs of channel A and B.
    pub comparators: [bool; 2],
    /// Conversion strategy of channel A and B.
    pub strategy: [Strategy; 2],
    pub reference: ReferenceSample,
    /// Raw calibration button level.
    pub trigger: bool,
    /// Output calibrated instead of raw scaled values.
    pub calibrate: bool,
    /// Display mode code.
    pub mode: u4,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            enable: true,
            comparators: [false; 2],
            strategy: [Strategy::Sar; 2],
            reference: ReferenceSample::default(),
            trigger: false,
            calibrate: false,
            mode: u4::new(0),
        }
    }
}

/// Outputs of one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Output {
    /// Live measurement for the display.
    pub value: u16,
    /// Selection the value was routed with.
    pub selection: Selection,
    /// Code to drive onto the PWM (A) and R2R ladder (B) for the next tick.
    pub drive: [u16; 2],
}

#[derive(Clone, Debug)]
pub struct Frontend {
    converters: [Converter; 2],
    averagers: [Averager<WINDOW>; 2],
    reference: Averager<WINDOW>,
    strobe: EdgeDetector,
    debouncer: Debouncer,
    calibrators: [AutoCalibrator; 2],
    mode: ModeDecoder,
    selection: Selection,
    corrected: [u16; 2],
    output: Output,
}

impl Frontend {
    /// Construct the pipeline in its reset state.
    ///
    /// # Args
    /// * `config` - Static conversion, scaling and calibration parameters.
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        let converter = Converter::new(config.sar, config.ramp)?;
        let calibrator = AutoCalibrator::new(config.calibration_bits)?;
        let [reference, a, b] = config.scale;
        Ok(Self {
            converters: [converter.clone(), converter],
            averagers: [Averager::new(a), Averager::new(b)],
            reference: Averager::new(reference),
            strobe: EdgeDetector::default(),
            debouncer: Debouncer::default(),
            calibrators: [calibrator; 2],
            mode: ModeDecoder::default(),
            selection: Selection::BLANK,
            corrected: [0; 2],
            output: Output::default(),
        })
    }

    /// Advance the whole pipeline by one tick.
    pub fn tick(&mut self, inputs: &Inputs) -> Output {
        let selection = self.mode.update(inputs.mode);
        if selection != self.selection {
            log::debug!(
                "Selection {:?}/{:?}",
                selection.channel.map(<&'static str>::from),
                selection.representation.map(<&'static str>::from),
            );
            self.selection = selection;
        }
        let trigger = self.debouncer.update(inputs.trigger);

        let reference = self.reference.scaled();
        for ((corrected, cal), avg) in self
            .corrected
            .iter_mut()
            .zip(self.calibrators.iter_mut())
            .zip(self.averagers.iter())
        {
            *corrected =
                cal.update(trigger, inputs.calibrate, reference, avg.scaled());
        }
        let value = route(selection, &self.readings());

        let mut drive = [0; 2];
        for (i, (conv, avg)) in self
            .converters
            .iter_mut()
            .zip(self.averagers.iter_mut())
            .enumerate()
        {
            let c = conv.tick(
                inputs.strategy[i],
                inputs.enable,
                inputs.comparators[i],
            );
            avg.update(c.done, c.result);
            drive[i] = c.trial;
        }
        let admit = self.strobe.rising(inputs.reference.ready);
        self.reference.update(admit, inputs.reference.code);

        self.output = Output {
            value,
            selection,
            drive,
        };
        self.output
    }

    /// Routable registers, channel scaled values corrected per the last tick.
    pub fn readings(&self) -> Readings {
        let channel = |avg: &Averager<WINDOW>, scaled| ChannelReadings {
            raw: avg.raw(),
            average: avg.average(),
            scaled,
        };
        Readings {
            reference: channel(&self.reference, self.reference.scaled()),
            channel_a: channel(&self.averagers[0], self.corrected[0]),
            channel_b: channel(&self.averagers[1], self.corrected[1]),
        }
    }

    /// Held calibration offsets of channel A and B.
    pub fn offsets(&self) -> [i32; 2] {
        [self.calibrators[0].offset(), self.calibrators[1].offset()]
    }

    pub fn converter(&self, channel: usize) -> &Converter {
        &self.converters[channel]
    }

    /// Snapshot for telemetry reporting.
    pub fn telemetry(&self) -> TelemetryBuffer {
        TelemetryBuffer {
            readings: self.readings(),
            uncorrected: [self.averagers[0].scaled(), self.averagers[1].scaled()],
            offsets: self.offsets(),
            output: self.output,
        }
    }

    /// Return every component to its idle, zeroed state.
    ///
    /// Scaling and calibration width are kept.
    pub fn reset(&mut self) {
        for conv in self.converters.iter_mut() {
            conv.reset();
        }
        for avg in self.averagers.iter_mut() {
            avg.reset();
        }
        self.reference.reset();
        self.strobe = EdgeDetector::default();
        self.debouncer.reset();
        for cal in self.calibrators.iter_mut() {
            cal.reset();
        }
        self.mode.reset();
        self.selection = Selection::BLANK;
        self.corrected = [0; 2];
        self.output = Output::default();
    }
}

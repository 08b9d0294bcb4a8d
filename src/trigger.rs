use dsp::EdgeDetector;

/// Calibration trigger conditioning.
///
/// The asynchronous button level passes a two-stage synchronizer. The
/// debounced level only changes once both stages agree, and its rising edge
/// yields one single-tick pulse per press. Bounce shorter than the two
/// stages is ignored.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    sync: [bool; 2],
    level: bool,
    edge: EdgeDetector,
}

impl Debouncer {
    /// Sample the raw level.
    ///
    /// # Returns
    /// The trigger pulse, two ticks after the press.
    pub fn update(&mut self, level: bool) -> bool {
        match self.sync {
            [true, true] => self.level = true,
            [false, false] => self.level = false,
            _ => {}
        }
        let pulse = self.edge.rising(self.level);
        self.sync = [level, self.sync[0]];
        pulse
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

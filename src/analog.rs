//! Behavioural model of a converter's analog path.
//!
//! A ladder (R2R DAC or filtered PWM) is driven with a code and compared
//! against the input level. The model has a static offset error and a
//! settling lag: the comparator keeps seeing the previously settled code until
//! a new drive code has been held for `lag` ticks.

/// Ladder and comparator of one channel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ladder {
    /// Input level in LSB of the driven code.
    level: f32,
    /// Ladder offset error in LSB, added to the input.
    offset: f32,
    lag: u32,
    target: u16,
    age: u32,
    settled: u16,
}

impl Ladder {
    /// An ideal ladder at a given input level.
    pub fn new(level: f32) -> Self {
        Self {
            level,
            offset: 0.,
            lag: 0,
            target: 0,
            age: 0,
            settled: 0,
        }
    }

    /// Settle only after a code has been held for `lag` ticks.
    pub fn with_lag(self, lag: u32) -> Self {
        Self { lag, ..self }
    }

    /// Add a static offset error.
    pub fn with_offset(self, offset: f32) -> Self {
        Self { offset, ..self }
    }

    pub fn set_level(&mut self, level: f32) {
        self.level = level;
    }

    /// Apply the drive code for the next tick.
    pub fn drive(&mut self, code: u16) {
        if code != self.target {
            self.target = code;
            self.age = 0;
        } else {
            self.age = self.age.saturating_add(1);
        }
        if self.age >= self.lag {
            self.settled = self.target;
        }
    }

    /// Comparator output: the input exceeds the settled ladder output.
    pub fn comparator(&self) -> bool {
        self.level + self.offset > self.settled as f32
    }
}

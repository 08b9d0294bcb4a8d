//! Display mode decoding
//!
//! The externally supplied 4-bit mode code selects the live measurement.
//! The upper two bits select the channel, the lower two bits the
//! representation:
//!
//! | bits | channel     | representation |
//! |------|-------------|----------------|
//! | `00` | `Reference` | blank          |
//! | `01` | `ChannelA`  | `Raw`          |
//! | `10` | `ChannelB`  | `Averaged`     |
//! | `11` | blank       | `Scaled`       |
//!
//! Nine codes are live, the other seven (including `0000`) blank the output.
//! Decoding holds no state; [ModeDecoder] only registers the code for one
//! tick.
use arbitrary_int::u4;
use num_enum::TryFromPrimitive;

/// Measurement channel.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    TryFromPrimitive,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[repr(u8)]
pub enum Channel {
    /// Trusted reference
    Reference = 0b00,
    /// PWM converted channel
    ChannelA = 0b01,
    /// R2R converted channel
    ChannelB = 0b10,
}

/// Measurement representation.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    TryFromPrimitive,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[repr(u8)]
pub enum Representation {
    Raw = 0b01,
    Averaged = 0b10,
    Scaled = 0b11,
}

/// Decoded mode. `None` fields select zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub channel: Option<Channel>,
    pub representation: Option<Representation>,
}

impl Selection {
    pub const BLANK: Self = Self {
        channel: None,
        representation: None,
    };

    pub const fn new(channel: Channel, representation: Representation) -> Self {
        Self {
            channel: Some(channel),
            representation: Some(representation),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.channel.is_none() || self.representation.is_none()
    }

    /// The mode code selecting this, if any.
    pub fn code(&self) -> Option<u4> {
        match (self.channel, self.representation) {
            (Some(c), Some(r)) => Some(u4::new(((c as u8) << 2) | r as u8)),
            _ => None,
        }
    }
}

/// Decode a mode code.
pub fn decode(code: u4) -> Selection {
    let code = code.value();
    match (
        Channel::try_from(code >> 2),
        Representation::try_from(code & 0b11),
    ) {
        (Ok(channel), Ok(representation)) => {
            Selection::new(channel, representation)
        }
        _ => Selection::BLANK,
    }
}

/// Mode code register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeDecoder {
    code: u4,
}

impl Default for ModeDecoder {
    fn default() -> Self {
        Self { code: u4::new(0) }
    }
}

impl ModeDecoder {
    /// Register a new code.
    ///
    /// # Returns
    /// The selection for the code registered on the previous tick.
    pub fn update(&mut self, code: u4) -> Selection {
        let selection = decode(self.code);
        self.code = code;
        selection
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

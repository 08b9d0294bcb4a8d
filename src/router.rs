use crate::mode::{Channel, Representation, Selection};

/// The registers of one channel as seen by the router.
///
/// Narrower codes are zero-extended, never left-aligned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelReadings {
    pub raw: u16,
    pub average: u16,
    pub scaled: u16,
}

impl ChannelReadings {
    pub fn select(&self, representation: Option<Representation>) -> u16 {
        match representation {
            Some(Representation::Raw) => self.raw,
            Some(Representation::Averaged) => self.average,
            Some(Representation::Scaled) => self.scaled,
            None => 0,
        }
    }
}

/// All routable registers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Readings {
    pub reference: ChannelReadings,
    pub channel_a: ChannelReadings,
    pub channel_b: ChannelReadings,
}

impl Readings {
    pub fn channel(&self, channel: Channel) -> &ChannelReadings {
        match channel {
            Channel::Reference => &self.reference,
            Channel::ChannelA => &self.channel_a,
            Channel::ChannelB => &self.channel_b,
        }
    }
}

/// Select the live measurement.
///
/// Each channel first selects its representation, then the channel
/// multiplexer picks one of the three. A missing channel or representation
/// yields zero.
pub fn route(selection: Selection, readings: &Readings) -> u16 {
    let [reference, a, b] = [
        &readings.reference,
        &readings.channel_a,
        &readings.channel_b,
    ]
    .map(|r| r.select(selection.representation));
    match selection.channel {
        Some(Channel::Reference) => reference,
        Some(Channel::ChannelA) => a,
        Some(Channel::ChannelB) => b,
        None => 0,
    }
}

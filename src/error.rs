/// Configuration errors.
///
/// Only construction is fallible. Once built, the front-end never fails a
/// tick; malformed inputs degrade to zero or blank output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Code width {0} not in 1..=16 bits")]
    Width(u32),
    #[error("Tick divider ratio must be nonzero")]
    Divider,
    #[error("Scale {gain} >> {shift} overflows 16 bits for {bits} bit codes")]
    Scale { gain: u32, shift: u32, bits: u32 },
    #[error("Mode code {0:#x} exceeds 4 bits")]
    Mode(u8),
}

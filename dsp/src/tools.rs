/// Clamp a signed value into the unsigned range `[0, max]`.
///
/// Negative inputs map to zero, inputs at or above `max` map to `max`.
pub fn saturate(x: i32, max: u16) -> u16 {
    if x <= 0 {
        0
    } else if x >= max as i32 {
        max
    } else {
        x as u16
    }
}

/// Largest unsigned value of a `bits` wide code.
pub const fn full_scale(bits: u32) -> u16 {
    ((1u32 << bits) - 1) as u16
}

use serde::{Deserialize, Serialize};

/// Fixed-point scaling of a code into engineering units.
///
/// `y = (x * gain) >> shift`, truncating. With `shift = bits` the gain is the
/// full scale of a `bits` wide code in output units (e.g. millivolts).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scaler {
    pub gain: u32,
    pub shift: u32,
}

impl Scaler {
    pub const fn new(gain: u32, shift: u32) -> Self {
        Self { gain, shift }
    }

    /// Whether the full-scale result of a `bits` wide input fits 16 bits.
    pub fn check(&self, bits: u32) -> bool {
        if self.shift > 31 || bits == 0 || bits > 16 {
            return false;
        }
        let max = ((1u64 << bits) - 1) * self.gain as u64;
        (max >> self.shift) <= u16::MAX as u64
    }

    /// Scale a code.
    ///
    /// Saturates at `u16::MAX` for parameters that fail [`Scaler::check`].
    pub fn scale(&self, x: u16) -> u16 {
        let y = (x as u64 * self.gain as u64) >> self.shift.min(63);
        y.min(u16::MAX as u64) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millivolts() {
        // 8 bit code, 3.3 V full scale
        let s = Scaler::new(3300, 8);
        assert!(s.check(8));
        assert_eq!(s.scale(0), 0);
        assert_eq!(s.scale(128), 1650);
        assert_eq!(s.scale(255), 3287);
    }

    #[test]
    fn reject() {
        assert!(!Scaler::new(3300, 32).check(8));
        assert!(!Scaler::new(1 << 17, 8).check(8));
        assert!(!Scaler::new(1, 0).check(17));
        assert!(Scaler::new(1, 0).check(16));
        assert_eq!(Scaler::new(1 << 17, 8).scale(255), u16::MAX);
    }
}

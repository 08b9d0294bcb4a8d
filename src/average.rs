use dsp::{Boxcar, Scaler};

/// Per-channel averaging and scaling stage.
///
/// Admitting a sample updates the raw and averaged registers on the same
/// tick. The scaled register follows one tick later, on the delayed admit
/// strobe, so a new raw sample is reflected in the scaled value with exactly
/// one tick of latency.
#[derive(Clone, Debug)]
pub struct Averager<const N: usize> {
    boxcar: Boxcar<N>,
    scaler: Scaler,
    raw: u16,
    average: u16,
    scaled: u16,
    pending: bool,
}

impl<const N: usize> Averager<N> {
    pub fn new(scaler: Scaler) -> Self {
        Self {
            boxcar: Boxcar::default(),
            scaler,
            raw: 0,
            average: 0,
            scaled: 0,
            pending: false,
        }
    }

    /// Advance by one tick.
    ///
    /// # Args
    /// * `admit` - Admit `x` into the window on this tick.
    /// * `x` - New sample.
    pub fn update(&mut self, admit: bool, x: u16) {
        if self.pending {
            self.scaled = self.scaler.scale(self.average);
        }
        self.pending = admit;
        if admit {
            self.raw = x;
            self.average = self.boxcar.update(x);
        }
    }

    /// Latest admitted sample.
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Truncated window average.
    pub fn average(&self) -> u16 {
        self.average
    }

    /// Scaled average in engineering units.
    pub fn scaled(&self) -> u16 {
        self.scaled
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.scaler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_of_four() {
        let mut avg = Averager::<4>::new(Scaler::new(1, 0));
        for x in [10, 20, 30, 40] {
            avg.update(true, x);
        }
        assert_eq!(avg.raw(), 40);
        assert_eq!(avg.average(), 25);
    }

    #[test]
    fn scaled_latency() {
        let mut avg = Averager::<1>::new(Scaler::new(3300, 8));
        avg.update(true, 128);
        assert_eq!(avg.average(), 128);
        assert_eq!(avg.scaled(), 0);
        avg.update(false, 0);
        assert_eq!(avg.scaled(), 1650);
        // held until the next sample
        for _ in 0..10 {
            avg.update(false, 255);
            assert_eq!((avg.raw(), avg.average(), avg.scaled()), (128, 128, 1650));
        }
    }

    #[test]
    fn back_to_back() {
        let mut avg = Averager::<2>::new(Scaler::new(2, 0));
        avg.update(true, 10);
        avg.update(true, 20);
        // scaled reflects the previous tick's average
        assert_eq!((avg.average(), avg.scaled()), (15, 10));
        avg.update(true, 30);
        assert_eq!((avg.average(), avg.scaled()), (25, 30));
        avg.update(false, 0);
        assert_eq!(avg.scaled(), 50);
    }

    #[test]
    fn reset() {
        let mut avg = Averager::<2>::new(Scaler::new(2, 0));
        avg.update(true, 10);
        avg.update(true, 10);
        avg.reset();
        assert_eq!((avg.raw(), avg.average(), avg.scaled()), (0, 0, 0));
        avg.update(true, 10);
        assert_eq!(avg.average(), 5);
    }
}

/// Sliding window (boxcar) sum over the last `N` samples.
///
/// The history is a ring buffer indexed by a wrapping write pointer, so
/// admitting a sample costs one subtraction and one addition regardless of
/// the window depth. The running sum always equals the sum over the buffer.
///
/// `N` must be a power of two; the averaged output is a plain right shift.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Boxcar<const N: usize> {
    buf: [u16; N],
    idx: usize,
    sum: u32,
}

impl<const N: usize> Default for Boxcar<N> {
    fn default() -> Self {
        Self {
            buf: [0; N],
            idx: 0,
            sum: 0,
        }
    }
}

impl<const N: usize> Boxcar<N> {
    /// Base-two logarithm of the window depth.
    ///
    /// Referencing this fails compilation unless `N` is a power of two no
    /// larger than 2^16 (so that the 32 bit sum of 16 bit samples cannot
    /// overflow).
    pub const LOG2: u32 = {
        assert!(N.is_power_of_two() && N <= 1 << 16);
        N.trailing_zeros()
    };

    /// Admit a new sample, evicting the oldest.
    ///
    /// # Returns
    /// The new truncated average.
    pub fn update(&mut self, x: u16) -> u16 {
        let old = core::mem::replace(&mut self.buf[self.idx], x);
        self.sum = self.sum - old as u32 + x as u32;
        self.idx = (self.idx + 1) & (N - 1);
        self.get()
    }

    /// Truncated average `floor(sum / N)`.
    pub fn get(&self) -> u16 {
        (self.sum >> Self::LOG2) as u16
    }

    /// Running sum over the window.
    pub fn sum(&self) -> u32 {
        self.sum
    }

    /// Window contents, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &u16> + '_ {
        self.buf[self.idx..].iter().chain(self.buf[..self.idx].iter())
    }
}

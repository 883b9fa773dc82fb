//! Boxcar smoothening of raw control readings.

/// Ring buffer returning the average of the last `N` written values.
///
/// Meant for low-pass filtering of a single CV input. Kept small, it is
/// not optimized for long windows.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Buffer<const N: usize> {
    buffer: [f32; N],
    pointer: usize,
}

impl<const N: usize> Default for Buffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Buffer<N> {
    pub fn new() -> Self {
        Self {
            buffer: [0.0; N],
            pointer: 0,
        }
    }

    pub fn write(&mut self, value: f32) {
        self.buffer[self.pointer] = value;
        self.pointer = (self.pointer + 1) % N;
    }

    pub fn read(&self) -> f32 {
        let sum: f32 = self.buffer.iter().sum();
        sum / N as f32
    }

    /// Overwrite the whole history, so the average starts at `value`.
    pub fn fill(&mut self, value: f32) {
        self.buffer = [value; N];
    }
}

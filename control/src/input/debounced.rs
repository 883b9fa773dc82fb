//! Debouncing of a mechanical button.

/// Stability window of the reset button.
pub const DEBOUNCE_INTERVAL: u32 = 5;

/// Polled edge detector ignoring bounces shorter than the interval.
///
/// The pin level is adopted once it stays unchanged for `interval`
/// milliseconds. After each `update`, `rose` and `fell` report whether the
/// adopted level changed in that very call.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debounced {
    interval: u32,
    stable: bool,
    unstable: bool,
    unstable_since: u32,
    rose: bool,
    fell: bool,
}

impl Default for Debounced {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL)
    }
}

impl Debounced {
    #[must_use]
    pub fn new(interval: u32) -> Self {
        Self {
            interval,
            stable: false,
            unstable: false,
            unstable_since: 0,
            rose: false,
            fell: false,
        }
    }

    pub fn update(&mut self, level: bool, now: u32) {
        self.rose = false;
        self.fell = false;

        if level != self.unstable {
            self.unstable = level;
            self.unstable_since = now;
        }

        let settled = now.wrapping_sub(self.unstable_since) >= self.interval;
        if self.unstable != self.stable && settled {
            self.stable = self.unstable;
            self.rose = self.stable;
            self.fell = !self.stable;
        }
    }

    pub fn rose(&self) -> bool {
        self.rose
    }

    pub fn fell(&self) -> bool {
        self.fell
    }

    pub fn is_high(&self) -> bool {
        self.stable
    }
}

//! Smoothening, mapping and quantization of a CV input.

#[allow(unused_imports)]
use micromath::F32Ext;

use super::buffer::Buffer;
use crate::adc::{self, ADC_MAX};

/// Hysteresis used unless configured otherwise, in ADC counts.
pub const DEFAULT_BORDER_THRESHOLD: u16 = 16;

const AVERAGE_WINDOW: usize = 4;

/// The last reading that was reported to the consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Adopted {
    Nothing,
    Level(f32),
    Step(u16),
}

/// Abstraction of a CV input read through the ADC.
///
/// Raw readings are optionally smoothened, then mapped linearly from
/// `[0, ADC_MAX]` onto the configured output range. Quantized inputs split
/// the ADC range into equal bins, one per integer step of the output.
///
/// The input reports a change only when the reading leaves the hysteresis
/// band around the last reported value. For quantized inputs the band
/// surrounds the border between two steps, for continuous inputs it
/// surrounds the reported reading itself.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogInput {
    low: f32,
    high: f32,
    quantise: bool,
    average: bool,
    border_threshold: u16,
    buffer: Buffer<AVERAGE_WINDOW>,
    input_value: f32,
    adopted: Adopted,
    current_value: f32,
    changed: bool,
}

impl Default for AnalogInput {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            low: 0.0,
            high: ADC_MAX as f32,
            quantise: false,
            average: false,
            border_threshold: DEFAULT_BORDER_THRESHOLD,
            buffer: Buffer::new(),
            input_value: 0.0,
            adopted: Adopted::Nothing,
            current_value: 0.0,
            changed: false,
        }
    }

    /// Map the whole ADC range onto `[low, high]`.
    ///
    /// With `quantise`, the output is snapped to integer steps above `low`.
    /// The next `update` is always reported as a change.
    pub fn set_range(&mut self, low: f32, high: f32, quantise: bool) {
        self.low = low;
        self.high = high;
        self.quantise = quantise;
        self.adopted = Adopted::Nothing;
        self.current_value = low;
    }

    pub fn set_average(&mut self, average: bool) {
        self.average = average;
    }

    pub fn set_border_threshold(&mut self, threshold: u16) {
        self.border_threshold = threshold;
    }

    pub fn border_threshold(&self) -> u16 {
        self.border_threshold
    }

    /// Process a fresh ADC reading, returning whether the value changed.
    pub fn update(&mut self, raw: u16) -> bool {
        let raw = adc::clamp(raw) as f32;

        let level = if self.average {
            if self.adopted == Adopted::Nothing {
                self.buffer.fill(raw);
            } else {
                self.buffer.write(raw);
            }
            self.buffer.read()
        } else {
            raw
        };
        self.input_value = level;

        self.changed = if self.quantise {
            self.adopt_step(level)
        } else {
            self.adopt_level(level)
        };
        self.changed
    }

    /// The last reported value, within the configured range.
    pub fn current_value(&self) -> f32 {
        self.current_value
    }

    /// The latest reading after smoothening, in ADC counts.
    pub fn input_value(&self) -> f32 {
        self.input_value
    }

    pub fn changed(&self) -> bool {
        self.changed
    }

    fn steps(&self) -> u16 {
        let span = (self.high - self.low).floor().max(0.0);
        (span as u16).saturating_add(1)
    }

    fn adopt_step(&mut self, level: f32) -> bool {
        let steps = self.steps();
        let width = (ADC_MAX as f32 + 1.0) / steps as f32;
        let candidate = ((level / width) as u16).min(steps - 1);

        let adopt = match self.adopted {
            Adopted::Step(step) if step == candidate => false,
            Adopted::Step(step) => {
                // Capped, so every step stays reachable even with narrow bins.
                let threshold = (self.border_threshold as f32).min(width / 2.0);
                if candidate > step {
                    let border = (step + 1) as f32 * width;
                    level - border > threshold
                } else {
                    let border = step as f32 * width;
                    border - level > threshold
                }
            }
            Adopted::Nothing | Adopted::Level(_) => true,
        };

        if adopt {
            self.adopted = Adopted::Step(candidate);
            self.current_value = self.low + candidate as f32;
        }
        adopt
    }

    fn adopt_level(&mut self, level: f32) -> bool {
        let adopt = match self.adopted {
            Adopted::Level(adopted) => {
                let moved = (level - adopted).abs() > self.border_threshold as f32;
                let at_end = level <= 0.0 || level >= ADC_MAX as f32;
                #[allow(clippy::float_cmp)]
                let reached_end = at_end && level != adopted;
                moved || reached_end
            }
            Adopted::Nothing | Adopted::Step(_) => true,
        };

        if adopt {
            self.adopted = Adopted::Level(level);
            self.current_value = self.low + (self.high - self.low) * (level / ADC_MAX as f32);
        }
        adopt
    }
}

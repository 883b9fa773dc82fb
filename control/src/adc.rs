//! Resolution of the analog-to-digital converter sampling the CV inputs.

/// Width of a single ADC sample in bits.
pub const ADC_BITS: u8 = 13;

/// The highest value an ADC sample can take.
pub const ADC_MAX: u16 = (1 << ADC_BITS) - 1;

/// Multiplier translating values calibrated for a 10-bit ADC.
///
/// Settings written for the older 10-bit hardware keep their meaning when
/// scaled by this factor.
pub const LEGACY_10_BIT_SCALE: u16 = 1 << (ADC_BITS - 10);

/// Clamp a raw reading into the valid ADC range.
#[must_use]
pub fn clamp(raw: u16) -> u16 {
    raw.min(ADC_MAX)
}

//! Raw readings of the control peripherals for a single tick.

/// The current state of all control peripherals.
///
/// `Snapshot` is meant to be passed from the hardware binding to the control
/// interface on every tick. It carries raw data only: ADC samples, the
/// undebounced level of the button pin, and the value of a free running
/// millisecond counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub channel_cv: u16,
    pub start_cv: u16,
    /// Level of the reset button pin, `true` while pressed.
    pub button: bool,
    /// Milliseconds since boot. Allowed to wrap around.
    pub now: u32,
}

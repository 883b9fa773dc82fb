//! Hardware hooks needed to bring the control inputs up.

/// Direction of the reset jack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    Input,
    Output,
}

/// Peripheral configuration the interface performs during initialization.
///
/// Implemented by the firmware of the target board. Reading of the pins is
/// not part of this trait, raw readings are passed to every tick through
/// `Snapshot` instead.
pub trait Board {
    fn set_adc_resolution(&mut self, bits: u8);

    fn set_reset_cv_direction(&mut self, direction: PinDirection);

    /// Call `handler` on every rising edge of the reset CV pin.
    fn attach_reset_cv_interrupt(&mut self, handler: fn());

    fn configure_reset_button(&mut self);
}

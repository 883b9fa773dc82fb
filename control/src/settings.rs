//! Read-only configuration of the control interface.

/// Options influencing how control inputs are interpreted.
///
/// Settings are parsed and persisted by the surrounding firmware. The
/// interface only reads them once during initialization. Call `validate`
/// before passing them over, the interface assumes they make sense.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Drive the reset jack as an output instead of reading it.
    pub reset_is_output: bool,
    /// Scaling of the start CV, calibrated for a 10-bit ADC.
    pub start_cv_divider: u16,
    /// Interpret the start CV as a root note instead of a start position.
    pub pitch_mode: bool,
    /// Snap the root CV to semitones.
    pub quantise_root_cv: bool,
    /// The lowest note reachable through the root CV.
    pub low_note: f32,
    /// Span of the root CV in semitones.
    pub note_range: f32,
    /// Switch channels right away, without waiting for the loop point.
    pub chan_cv_immediate: bool,
    /// Jump to the new start position right away.
    pub start_cv_immediate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reset_is_output: false,
            start_cv_divider: 2,
            pitch_mode: false,
            quantise_root_cv: true,
            low_note: 36.0,
            note_range: 39.0,
            chan_cv_immediate: true,
            start_cv_immediate: false,
        }
    }
}

/// Reason why given settings were rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidSettings {
    StartCVDivider,
    LowNote,
    NoteRange,
}

impl Settings {
    /// # Errors
    ///
    /// Fails with `InvalidSettings` naming the first field that cannot be
    /// used by the interface.
    pub fn validate(&self) -> Result<(), InvalidSettings> {
        if self.start_cv_divider == 0 {
            return Err(InvalidSettings::StartCVDivider);
        }
        if !self.low_note.is_finite() || self.low_note < 0.0 {
            return Err(InvalidSettings::LowNote);
        }
        if !self.note_range.is_finite() || self.note_range <= 0.0 {
            return Err(InvalidSettings::NoteRange);
        }
        Ok(())
    }
}

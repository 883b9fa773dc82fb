//! Interpretation of the start CV.
//!
//! The same jack either sets the playback start position within the current
//! file, or in pitch mode the root note the file is played at. The mode is
//! selected once from settings and never changes afterwards.

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::adc::{ADC_MAX, LEGACY_10_BIT_SCALE};
use crate::changes::Changes;
use crate::input::analog::AnalogInput;
use crate::log;
use crate::settings::Settings;

/// Hysteresis of the start position, in ADC counts.
pub const FREE_BORDER_THRESHOLD: u16 = 32;

/// Hysteresis of the root note, in ADC counts.
pub const PITCH_BORDER_THRESHOLD: u16 = 64;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartControl {
    Free(FreeStart),
    Pitch(PitchRoot),
}

impl StartControl {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.pitch_mode {
            log::info!("In pitch mode");
            Self::Pitch(PitchRoot::new(settings))
        } else {
            log::info!("Not in pitch mode");
            Self::Free(FreeStart::new(settings))
        }
    }

    pub fn update(&mut self, raw: u16) -> Changes {
        match self {
            Self::Free(free) => free.update(raw),
            Self::Pitch(pitch) => pitch.update(raw),
        }
    }

    pub fn start(&self) -> Option<u16> {
        match self {
            Self::Free(free) => Some(free.start()),
            Self::Pitch(_) => None,
        }
    }

    pub fn root_note(&self) -> Option<f32> {
        match self {
            Self::Free(_) => None,
            Self::Pitch(pitch) => Some(pitch.root_note()),
        }
    }

    pub fn root_note_cv(&self) -> Option<f32> {
        match self {
            Self::Free(_) => None,
            Self::Pitch(pitch) => Some(pitch.root_note_cv()),
        }
    }
}

/// Start position within the played file, driven by CV.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FreeStart {
    input: AnalogInput,
    divider: u16,
    immediate: bool,
    start: u16,
}

impl FreeStart {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let divider = settings
            .start_cv_divider
            .max(1)
            .saturating_mul(LEGACY_10_BIT_SCALE);

        let mut input = AnalogInput::new();
        input.set_range(0.0, f32::from(ADC_MAX) / f32::from(divider), false);
        input.set_average(true);
        input.set_border_threshold(FREE_BORDER_THRESHOLD);
        log::info!("Start range {=f32}", f32::from(ADC_MAX) / f32::from(divider));

        Self {
            input,
            divider,
            immediate: settings.start_cv_immediate,
            start: 0,
        }
    }

    pub fn update(&mut self, raw: u16) -> Changes {
        if !self.input.update(raw) {
            return Changes::empty();
        }

        let mut changes = Changes::TIME_CV_CHANGED;
        if self.immediate {
            changes |= Changes::CHANGE_START_NOW;
        }

        // Rounded, so float error does not pull the offset one count down.
        let start = libm::roundf(self.input.current_value() * f32::from(self.divider));
        self.start = start.clamp(0.0, f32::from(ADC_MAX)) as u16;

        changes
    }

    /// Offset into the file, in ADC counts.
    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn divider(&self) -> u16 {
        self.divider
    }
}

/// Root note of the played file, driven by CV.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PitchRoot {
    input: AnalogInput,
    quantise: bool,
    root_note_cv: f32,
    root_note_cv_old: Option<i32>,
    root_note: f32,
    root_note_old: Option<i32>,
}

impl PitchRoot {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        // Half a semitone up, so each note sits in the middle of its bin.
        let low = settings.low_note + 0.5;

        let mut input = AnalogInput::new();
        input.set_range(low, low + settings.note_range, settings.quantise_root_cv);
        input.set_border_threshold(PITCH_BORDER_THRESHOLD);

        Self {
            input,
            quantise: settings.quantise_root_cv,
            root_note_cv: settings.low_note,
            root_note_cv_old: None,
            root_note: settings.low_note,
            root_note_old: None,
        }
    }

    pub fn update(&mut self, raw: u16) -> Changes {
        let mut changes = Changes::empty();

        if !self.input.update(raw) {
            return changes;
        }

        let root_cv = self.input.current_value();
        if self.quantise {
            let note = root_cv.floor();
            self.root_note_cv = note;
            if self.root_note_cv_old == Some(note as i32) {
                return changes;
            }
            self.root_note_cv_old = Some(note as i32);
            changes |= Changes::ROOT_CV_CHANGED;
        } else {
            self.root_note_cv = root_cv;
            changes |= Changes::ROOT_CV_CHANGED;
        }

        self.root_note = self.root_note_cv;

        let note = self.root_note.floor() as i32;
        if self.root_note_old != Some(note) {
            log::debug!("Root note {=i32}", note);
            changes |= Changes::ROOT_NOTE_CHANGED;
            self.root_note_old = Some(note);
        }

        changes
    }

    pub fn root_note(&self) -> f32 {
        self.root_note
    }

    pub fn root_note_cv(&self) -> f32 {
        self.root_note_cv
    }
}

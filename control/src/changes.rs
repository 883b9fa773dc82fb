//! Bitmask of events detected during a single control tick.

use core::ops::{BitAnd, BitOr, BitOrAssign};

/// Set of changes reported by `Interface::update`.
///
/// This is a 16-bit word whose bits are the named flags below. Callers may
/// test the flags through `contains` or read the raw word with `bits`. Bits
/// outside of `Changes::ALL` are always zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Changes(u16);

impl Changes {
    /// Channel CV selected a channel different from the one playing.
    pub const CHANNEL_CHANGED: Self = Self(1 << 0);
    /// Start CV moved in free mode.
    pub const TIME_CV_CHANGED: Self = Self(1 << 1);
    /// The new start position should be applied immediately.
    pub const CHANGE_START_NOW: Self = Self(1 << 2);
    /// Root CV was adopted in pitch mode.
    pub const ROOT_CV_CHANGED: Self = Self(1 << 3);
    /// Root note crossed to another semitone.
    pub const ROOT_NOTE_CHANGED: Self = Self(1 << 4);
    pub const BUTTON_SHORT_PRESS: Self = Self(1 << 5);
    pub const BUTTON_LONG_PRESS: Self = Self(1 << 6);
    pub const BUTTON_LONG_RELEASE: Self = Self(1 << 7);
    pub const BUTTON_PULSE: Self = Self(1 << 8);
    /// Either the reset CV received a rising edge or the button was clicked.
    pub const RESET_TRIGGERED: Self = Self(1 << 9);

    /// Union of all the defined flags.
    pub const ALL: Self = Self((1 << 10) - 1);

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for Changes {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOrAssign for Changes {
    fn bitor_assign(&mut self, other: Self) {
        self.insert(other);
    }
}

impl BitAnd for Changes {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl From<Changes> for u16 {
    fn from(changes: Changes) -> Self {
        changes.bits()
    }
}

//! Playback state shared between the control interface and the audio engine.

use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

/// Small record the control interface and the audio engine talk through.
///
/// Each field has a single writer:
///
/// * `current_channel` is written by the audio engine, read by the control.
/// * `next_channel` is written by the control, read by the audio engine.
/// * `channel_changed` is raised by the control and cleared by the audio
///   engine once it switched.
///
/// Both sides run on the same core and the audio engine reads the fields on
/// buffer boundaries, so plain word-sized loads and stores are sufficient.
#[derive(Debug)]
pub struct PlayState {
    current_channel: AtomicU16,
    next_channel: AtomicU16,
    channel_changed: AtomicBool,
}

impl Default for PlayState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PlayState {
    #[must_use]
    pub const fn new(channel: u16) -> Self {
        Self {
            current_channel: AtomicU16::new(channel),
            next_channel: AtomicU16::new(channel),
            channel_changed: AtomicBool::new(false),
        }
    }

    pub fn current_channel(&self) -> u16 {
        self.current_channel.load(Ordering::Relaxed)
    }

    pub fn next_channel(&self) -> u16 {
        self.next_channel.load(Ordering::Relaxed)
    }

    pub fn channel_changed(&self) -> bool {
        self.channel_changed.load(Ordering::Relaxed)
    }

    /// Mark the given channel as playing. Audio engine only.
    pub fn set_current_channel(&self, channel: u16) {
        self.current_channel.store(channel, Ordering::Relaxed);
    }

    /// Read and clear the immediate switch request. Audio engine only.
    pub fn take_channel_changed(&self) -> bool {
        let changed = self.channel_changed.load(Ordering::Relaxed);
        if changed {
            self.channel_changed.store(false, Ordering::Relaxed);
        }
        changed
    }

    pub(crate) fn set_next_channel(&self, channel: u16) {
        self.next_channel.store(channel, Ordering::Relaxed);
    }

    pub(crate) fn request_channel_change(&self) {
        self.channel_changed.store(true, Ordering::Relaxed);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PlayState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "PlayState {{ current_channel: {=u16}, next_channel: {=u16}, channel_changed: {=bool} }}",
            self.current_channel(),
            self.next_channel(),
            self.channel_changed(),
        );
    }
}

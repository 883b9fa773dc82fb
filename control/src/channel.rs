//! Selection of the playing channel through CV.

use crate::changes::Changes;
use crate::input::analog::AnalogInput;
use crate::log;
use crate::play_state::PlayState;

/// Translate the channel CV into an index of a channel.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelControl {
    input: AnalogInput,
    count: u16,
    immediate: bool,
}

impl ChannelControl {
    #[must_use]
    pub fn new(count: u16, immediate: bool) -> Self {
        let mut control = Self {
            input: AnalogInput::new(),
            count: 1,
            immediate,
        };
        control.set_count(count);
        control
    }

    /// Spread the CV range over `count` channels. Zero is treated as one.
    pub fn set_count(&mut self, count: u16) {
        self.count = count.max(1);
        self.input.set_range(0.0, f32::from(self.count - 1), true);
        log::info!("Channel count {=u16}", self.count);
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn update(&mut self, raw: u16, play_state: &PlayState) -> Changes {
        if !self.input.update(raw) {
            return Changes::empty();
        }

        let last = f32::from(self.count - 1);
        let channel = self.input.current_value().clamp(0.0, last) as u16;

        if channel == play_state.current_channel() {
            log::debug!("Channel change flag but channel is the same: {=u16}", channel);
            return Changes::empty();
        }

        log::debug!("Channel {=u16}", channel);
        play_state.set_next_channel(channel);
        if self.immediate {
            play_state.request_channel_change();
        }
        Changes::CHANNEL_CHANGED
    }
}

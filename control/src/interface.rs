//! Composition of all control inputs into a single per-tick report.

use crate::adc::ADC_BITS;
use crate::board::{Board, PinDirection};
use crate::button::{Button, ButtonTimings};
use crate::changes::Changes;
use crate::channel::ChannelControl;
use crate::input::snapshot::Snapshot;
use crate::log;
use crate::play_state::PlayState;
use crate::reset;
use crate::settings::Settings;
use crate::start::StartControl;

/// The control interface of the player.
///
/// Initialize it once with `init`, then call `update` with a fresh
/// `Snapshot` on every tick, ideally at least once per millisecond. Each
/// call returns the changes detected during that tick and updates the
/// shared `PlayState` when a new channel is selected.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interface<'a> {
    channel: ChannelControl,
    start: StartControl,
    button: Button,
    play_state: &'a PlayState,
    changes: Changes,
}

impl<'a> Interface<'a> {
    /// Configure peripherals and build the interface.
    ///
    /// Settings are expected to be validated already.
    pub fn init<B: Board>(
        board: &mut B,
        channel_count: u16,
        settings: &Settings,
        timings: ButtonTimings,
        play_state: &'a PlayState,
    ) -> Self {
        board.set_adc_resolution(ADC_BITS);

        let direction = if settings.reset_is_output {
            PinDirection::Output
        } else {
            PinDirection::Input
        };
        board.set_reset_cv_direction(direction);
        board.attach_reset_cv_interrupt(reset::on_reset_cv_rising_edge);

        board.configure_reset_button();
        let button = Button::new(timings);

        let start = StartControl::from_settings(settings);
        let channel = ChannelControl::new(channel_count, settings.chan_cv_immediate);

        Self {
            channel,
            start,
            button,
            play_state,
            changes: Changes::empty(),
        }
    }

    /// Spread the channel CV over a new number of channels.
    pub fn set_channel_count(&mut self, count: u16) {
        self.channel.set_count(count);
    }

    /// Process a single tick of control input.
    pub fn update(&mut self, snapshot: Snapshot) -> Changes {
        let channel = self.channel.update(snapshot.channel_cv, self.play_state);
        let start = self.start.update(snapshot.start_cv);
        let button = self.button.update(snapshot.button, snapshot.now);

        let mut changes = channel | start | button;

        let reset_cv = reset::reset_cv().take();
        if reset_cv || changes.contains(Changes::BUTTON_SHORT_PRESS) {
            log::debug!("Reset triggered");
            changes |= Changes::RESET_TRIGGERED;
        }

        self.changes = changes;
        changes
    }

    /// Changes returned by the last `update`.
    pub fn changes(&self) -> Changes {
        self.changes
    }

    /// Start position in ADC counts. Available only outside of pitch mode.
    pub fn start(&self) -> Option<u16> {
        self.start.start()
    }

    /// Available only in pitch mode.
    pub fn root_note(&self) -> Option<f32> {
        self.start.root_note()
    }

    /// Available only in pitch mode.
    pub fn root_note_cv(&self) -> Option<f32> {
        self.start.root_note_cv()
    }

    pub fn pitch_mode(&self) -> bool {
        matches!(self.start, StartControl::Pitch(_))
    }

    pub fn channel_count(&self) -> u16 {
        self.channel.count()
    }

    pub fn button_pressed(&self) -> bool {
        self.button.is_pressed()
    }
}

//! Manage the reset button's state.

use crate::changes::Changes;
use crate::input::debounced::{Debounced, DEBOUNCE_INTERVAL};
use crate::log;

/// Durations classifying button presses, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonTimings {
    short_press: u32,
    long_press: u32,
    pulse_delay: u32,
}

impl Default for ButtonTimings {
    fn default() -> Self {
        Self {
            short_press: 20,
            long_press: 500,
            pulse_delay: 100,
        }
    }
}

impl ButtonTimings {
    /// Returns `None` unless `short_press < long_press` and `pulse_delay > 0`.
    #[must_use]
    pub fn try_new(short_press: u32, long_press: u32, pulse_delay: u32) -> Option<Self> {
        if short_press >= long_press || pulse_delay == 0 {
            return None;
        }
        Some(Self {
            short_press,
            long_press,
            pulse_delay,
        })
    }

    pub fn short_press(&self) -> u32 {
        self.short_press
    }

    pub fn long_press(&self) -> u32 {
        self.long_press
    }

    pub fn pulse_delay(&self) -> u32 {
        self.pulse_delay
    }

    fn is_short_press(&self, held: u32) -> bool {
        (self.short_press..=self.long_press).contains(&held)
    }
}

/// Milliseconds elapsed since the button went down.
///
/// Time is measured from the free running clock passed to every `tick`. The
/// timer only runs while the button is down.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonTimer {
    elapsed: u32,
    running: bool,
    last_tick: Option<u32>,
}

impl ButtonTimer {
    pub fn tick(&mut self, now: u32) {
        if let Some(last_tick) = self.last_tick {
            if self.running {
                self.elapsed = self.elapsed.saturating_add(now.wrapping_sub(last_tick));
            }
        }
        self.last_tick = Some(now);
    }

    pub fn start(&mut self) {
        self.elapsed = 0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.elapsed = 0;
        self.running = false;
    }

    pub fn rewind(&mut self, elapsed: u32) {
        self.elapsed = elapsed;
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    Idle,
    Held,
    LongHeld,
}

/// State machine turning button edges into press events.
///
/// A click between the short and long durations emits a short press.
/// Holding longer emits a long press on every tick, plus a pulse each
/// `pulse_delay` milliseconds. Releasing after that emits a long release.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    debounced: Debounced,
    timer: ButtonTimer,
    state: State,
    timings: ButtonTimings,
}

impl Default for Button {
    fn default() -> Self {
        Self::new(ButtonTimings::default())
    }
}

impl Button {
    #[must_use]
    pub fn new(timings: ButtonTimings) -> Self {
        Self {
            debounced: Debounced::new(DEBOUNCE_INTERVAL),
            timer: ButtonTimer::default(),
            state: State::Idle,
            timings,
        }
    }

    pub fn update(&mut self, level: bool, now: u32) -> Changes {
        let mut changes = Changes::empty();

        self.timer.tick(now);
        self.debounced.update(level, now);

        if self.debounced.rose() {
            self.timer.start();
            self.state = State::Held;
        }

        if self.debounced.fell() {
            let held = self.timer.elapsed();
            match self.state {
                State::Held if self.timings.is_short_press(held) => {
                    log::debug!("Button short press after {=u32} ms", held);
                    changes |= Changes::BUTTON_SHORT_PRESS;
                }
                // Ticks may skip over the long duration while held.
                State::Held if held > self.timings.long_press => {
                    log::debug!("Button long release after {=u32} ms", held);
                    changes |= Changes::BUTTON_LONG_RELEASE;
                }
                State::LongHeld => {
                    log::debug!("Button long release");
                    changes |= Changes::BUTTON_LONG_RELEASE;
                }
                State::Held | State::Idle => (),
            }
            self.timer.stop();
            self.state = State::Idle;
        }

        if self.state == State::Held && self.timer.elapsed() >= self.timings.long_press {
            self.state = State::LongHeld;
        }

        if self.state == State::LongHeld {
            changes |= Changes::BUTTON_LONG_PRESS;
            if self.timer.elapsed() - self.timings.long_press >= self.timings.pulse_delay {
                changes |= Changes::BUTTON_PULSE;
                self.timer.rewind(self.timings.long_press);
            }
        }

        changes
    }

    pub fn is_pressed(&self) -> bool {
        self.debounced.is_high()
    }

    pub fn held_for(&self) -> u32 {
        self.timer.elapsed()
    }
}

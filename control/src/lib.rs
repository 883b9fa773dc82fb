//! Control input front end of a CV driven sample player.
//!
//! Two CV inputs and a single button are polled on every tick and turned into
//! stable, debounced events. These are reported as a bitmask of `Changes`,
//! while channel selection is passed to the audio engine through the shared
//! `PlayState`:
//!
//! ```text
//!   [ Channel CV ]  [ Start CV ]  [ Button ]       [ Reset CV ]
//!         |              |            |                  |
//!         |              |            |            (interrupt)
//!         V              V            V                  V
//!   [ AnalogInput ] [ AnalogInput ] [ Debounced ]  [ ResetLatch ]
//!         |              |            |                  |
//!         V              V            V                  |
//!   [ ChannelControl ] [ StartControl ] [ Button ]       |
//!         |    |         |            |                  |
//!         |    +---------+-----+------+------------------+
//!         V                    V
//!    {PlayState}        [ Interface::update ] --> (Changes)
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod adc;
pub mod board;
pub mod button;
pub mod changes;
pub mod channel;
pub mod input;
pub mod interface;
mod log;
pub mod play_state;
pub mod reset;
pub mod settings;
pub mod start;

pub use board::{Board, PinDirection};
pub use button::ButtonTimings;
pub use changes::Changes;
pub use input::snapshot::Snapshot;
pub use interface::Interface;
pub use play_state::PlayState;
pub use settings::{InvalidSettings, Settings};

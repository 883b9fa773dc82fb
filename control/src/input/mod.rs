//! Abstractions of raw control peripherals.
//!
//! These turn noisy readings into stable values and clean edges. They hold
//! no knowledge of what the readings mean to the player.

pub mod analog;
mod buffer;
pub mod debounced;
pub mod snapshot;

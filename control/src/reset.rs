//! Capture of rising edges on the reset CV input.
//!
//! The edge is detected by a pin interrupt, while it is consumed by the
//! polling control loop. The only state crossing these two contexts is the
//! flag of the single `RESET_CV` latch.

use core::sync::atomic::{AtomicBool, Ordering};

/// Sticky flag raised by an interrupt and cleared by the control loop.
#[derive(Debug)]
pub struct ResetLatch {
    raised: AtomicBool,
}

impl Default for ResetLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetLatch {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Return whether the latch was raised since the last call and clear it.
    ///
    /// An edge arriving between the read and the clear is lost. Resets are
    /// idempotent, so that is fine.
    pub fn take(&self) -> bool {
        // Plain load and store, so this works on cores without CAS.
        let raised = self.raised.load(Ordering::Acquire);
        self.raised.store(false, Ordering::Release);
        raised
    }
}

static RESET_CV: ResetLatch = ResetLatch::new();

/// The latch of the reset CV jack.
pub fn reset_cv() -> &'static ResetLatch {
    &RESET_CV
}

/// Interrupt handler to be attached to rising edges of the reset CV pin.
pub fn on_reset_cv_rising_edge() {
    RESET_CV.raise();
}

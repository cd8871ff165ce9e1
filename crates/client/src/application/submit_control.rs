//! Single-flight guard for the submit action

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Allows at most one submission at a time.
///
/// Clones share the same flag. A submission holds a [`SubmitPermit`]; the
/// control is enabled again when the permit is dropped, whichever way the
/// submission ended.
#[derive(Debug, Clone, Default)]
pub struct SubmitControl {
    in_flight: Arc<AtomicBool>,
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the control, or `None` if a submission is already running.
    pub fn try_begin(&self) -> Option<SubmitPermit> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitPermit {
                in_flight: Arc::clone(&self.in_flight),
            })
    }

    /// True when a new submission would be accepted.
    pub fn is_enabled(&self) -> bool {
        !self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one submission.
#[derive(Debug)]
#[must_use = "the control is released as soon as the permit is dropped"]
pub struct SubmitPermit {
    in_flight: Arc<AtomicBool>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

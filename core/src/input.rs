//! Tap handling
//!
//! Turns a resolved tap into a placement or removal. Resolving the screen
//! point to a surface or an existing timer object is the host's job.

use std::time::{Duration, Instant};

use crate::bridge::PlacementListener;
use crate::identity::new_timer_id;

/// What a tap landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapTarget {
    /// A detected surface with no timer on it
    Surface,
    /// An existing timer object
    Timer(String),
}

/// Result of a tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    Placed(String),
    Removed(String),
    /// Arrived inside the debounce window and was dropped
    Debounced,
}

/// Drops taps that follow an accepted tap within `window`
#[derive(Debug, Clone)]
pub struct TapDebouncer {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl TapDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// Returns true and restarts the window if the tap at `now` is accepted
    pub fn try_accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted
            && now.saturating_duration_since(last) < self.window
        {
            return false;
        }
        self.last_accepted = Some(now);
        true
    }
}

/// Apply a tap: a surface tap places a new timer, a timer tap removes it.
pub fn handle_tap(
    listener: &impl PlacementListener,
    debouncer: &mut TapDebouncer,
    target: TapTarget,
    now: Instant,
    id_prefix: &str,
) -> TapOutcome {
    if !debouncer.try_accept(now) {
        tracing::debug!(tap = ?target, "tap debounced");
        return TapOutcome::Debounced;
    }

    match target {
        TapTarget::Surface => {
            let id = new_timer_id(id_prefix);
            listener.notify_placement(&id);
            TapOutcome::Placed(id)
        }
        TapTarget::Timer(id) => {
            listener.notify_removal(&id);
            TapOutcome::Removed(id)
        }
    }
}

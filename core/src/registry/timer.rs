//! Countup timer instances (runtime state)
//!
//! A `CountupTimer` represents one placed timer label. It starts at zero,
//! gains one second per tick while running and is reset when stopped.
//!
//! # Lifecycle
//!
//! 1. Placement event → `CountupTimer` created and running
//! 2. Tick source advances `elapsed_secs` once per period
//! 3. Removal event → stopped (count discarded) → dropped from the registry

use kitchen_timer_types::MinutesDisplay;

use super::format::format_elapsed;

/// An active countup timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountupTimer {
    id: String,
    elapsed_secs: u64,
    running: bool,
    /// Distinguishes this instance from earlier timers that used the same id.
    /// Tick sources carry the generation they were scheduled for.
    generation: u64,
}

impl CountupTimer {
    /// Create a running timer at 00:00
    pub fn start(id: String, generation: u64) -> Self {
        Self {
            id,
            elapsed_secs: 0,
            running: true,
            generation,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance by one second. Returns false (and changes nothing) once stopped.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        true
    }

    /// Stop the timer. Stopping discards the count; there is no resume.
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_secs = 0;
    }

    pub fn formatted(&self, minutes: MinutesDisplay) -> String {
        format_elapsed(self.elapsed_secs, minutes)
    }
}

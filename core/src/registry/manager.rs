//! Timer registry handle
//!
//! Owns every active timer and its tick source. All mutation goes through
//! one mutex so that cancelling a tick source and deleting its timer happen
//! as a single step with respect to tick delivery.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use kitchen_timer_types::{MinutesDisplay, RegistryConfig, TimerSnapshot};
use tokio::runtime::Handle;

use super::error::RegistryError;
use super::timer::CountupTimer;
use crate::scheduler::TickScheduler;

/// State guarded by the registry lock
#[derive(Debug)]
pub(crate) struct RegistryState {
    /// Active timers in placement order
    timers: IndexMap<String, CountupTimer>,
    scheduler: TickScheduler,
    next_generation: u64,
    minutes: MinutesDisplay,
}

impl RegistryState {
    /// Apply a tick delivered by a scheduled tick source.
    ///
    /// Returns false when the source is stale: the id is gone, or it now
    /// belongs to a newer timer. The caller stops ticking in that case.
    pub(crate) fn apply_scheduled_tick(&mut self, id: &str, generation: u64) -> bool {
        match self.timers.get_mut(id) {
            Some(timer) if timer.generation() == generation => timer.tick(),
            _ => false,
        }
    }
}

/// Lock registry state, recovering from a poisoned lock.
///
/// Every critical section leaves the state consistent, so a panic elsewhere
/// does not invalidate it.
pub(crate) fn lock_state(state: &Mutex<RegistryState>) -> MutexGuard<'_, RegistryState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Session-scoped collection of countup timers.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone)]
pub struct TimerRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl TimerRegistry {
    fn with_scheduler(config: &RegistryConfig, scheduler: TickScheduler) -> Self {
        Self {
            state: Arc::new(Mutex::new(RegistryState {
                timers: IndexMap::new(),
                scheduler,
                next_generation: 0,
                minutes: config.minutes_display,
            })),
        }
    }

    /// Registry whose ticks are delivered by the host calling [`tick`](Self::tick).
    ///
    /// This is the single-threaded cooperative model: the host's own loop is
    /// the tick source and the synchronization.
    pub fn manual(config: &RegistryConfig) -> Self {
        Self::with_scheduler(config, TickScheduler::manual())
    }

    /// Registry that spawns one repeating tick task per timer on `handle`.
    pub fn scheduled(config: &RegistryConfig, handle: Handle) -> Self {
        Self::with_scheduler(config, TickScheduler::runtime(handle, config.tick_interval()))
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        lock_state(&self.state)
    }

    // ─── Commands ───────────────────────────────────────────────────────────

    /// Create and start a timer at 00:00.
    ///
    /// An id that is already active is rejected and the running timer is
    /// left untouched.
    pub fn add(&self, id: impl Into<String>) -> Result<(), RegistryError> {
        let id = id.into();
        let mut state = self.lock();

        if state.timers.contains_key(&id) {
            return Err(RegistryError::DuplicateIdentifier { id });
        }

        let generation = state.next_generation;
        state.next_generation += 1;

        state
            .scheduler
            .schedule(&id, generation, Arc::downgrade(&self.state));
        state
            .timers
            .insert(id.clone(), CountupTimer::start(id.clone(), generation));

        tracing::debug!(timer_id = %id, generation, "timer started");
        Ok(())
    }

    /// Stop and discard a timer. Unknown ids are ignored.
    pub fn remove(&self, id: &str) {
        if let Err(err) = self.try_remove(id) {
            tracing::trace!(timer_id = %id, %err, "remove ignored");
        }
    }

    /// Stop and discard a timer, reporting whether it existed.
    pub fn try_remove(&self, id: &str) -> Result<(), RegistryError> {
        let mut state = self.lock();

        // Cancel before deleting: a tick waiting on the lock will find the
        // entry gone and end its task.
        state.scheduler.cancel(id);

        let Some(mut timer) = state.timers.shift_remove(id) else {
            return Err(RegistryError::UnknownIdentifier { id: id.to_string() });
        };
        let final_secs = timer.elapsed_secs();
        timer.stop();

        tracing::debug!(timer_id = %id, final_secs, "timer removed");
        Ok(())
    }

    /// Advance a timer by one second. Unknown or stopped ids are ignored.
    pub fn tick(&self, id: &str) {
        let mut state = self.lock();
        if let Some(timer) = state.timers.get_mut(id) {
            timer.tick();
        }
    }

    /// Advance every active timer by one second.
    ///
    /// Convenience for hosts that drive manual registries from a single loop.
    pub fn tick_all(&self) {
        let mut state = self.lock();
        for timer in state.timers.values_mut() {
            timer.tick();
        }
    }

    // ─── Queries ────────────────────────────────────────────────────────────

    /// Current `MM:SS` value, or `None` if the id is not active
    pub fn formatted(&self, id: &str) -> Option<String> {
        let state = self.lock();
        state.timers.get(id).map(|t| t.formatted(state.minutes))
    }

    pub fn elapsed_secs(&self, id: &str) -> Option<u64> {
        self.lock().timers.get(id).map(CountupTimer::elapsed_secs)
    }

    /// Snapshot of every active timer in placement order.
    ///
    /// Later adds and removes do not affect a snapshot already taken.
    pub fn all(&self) -> Vec<TimerSnapshot> {
        let state = self.lock();
        state
            .timers
            .values()
            .map(|t| TimerSnapshot {
                id: t.id().to_string(),
                elapsed_secs: t.elapsed_secs(),
                display: t.formatted(state.minutes),
            })
            .collect()
    }

    /// Active ids in placement order
    pub fn ids(&self) -> Vec<String> {
        self.lock().timers.keys().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().timers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().timers.is_empty()
    }

    /// Number of live tick tasks (always zero for manual registries)
    pub fn scheduled_len(&self) -> usize {
        self.lock().scheduler.len()
    }

    /// True when ticks only arrive through [`tick`](Self::tick)
    pub fn is_manual(&self) -> bool {
        self.lock().scheduler.is_manual()
    }
}

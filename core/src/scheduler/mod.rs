//! Tick scheduling
//!
//! Each running timer gets one repeating tick source. Sources are tokio
//! tasks keyed by timer id so the registry can cancel them by id.

mod task;

#[cfg(test)]
mod scheduler_tests;

use std::collections::HashMap;
use std::sync::{Mutex, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::registry::RegistryState;

#[derive(Debug)]
enum TickSource {
    /// The host calls `TimerRegistry::tick` itself
    Manual,
    /// One interval task per timer on the given runtime
    Runtime { handle: Handle, period: Duration },
}

/// Tick tasks keyed by timer id
#[derive(Debug)]
pub struct TickScheduler {
    source: TickSource,
    tasks: HashMap<String, JoinHandle<()>>,
}

impl TickScheduler {
    pub fn manual() -> Self {
        Self {
            source: TickSource::Manual,
            tasks: HashMap::new(),
        }
    }

    pub fn runtime(handle: Handle, period: Duration) -> Self {
        Self {
            source: TickSource::Runtime { handle, period },
            tasks: HashMap::new(),
        }
    }

    /// Start the tick source for a timer. Replaces (and aborts) any task
    /// still registered under the same id.
    pub(crate) fn schedule(
        &mut self,
        id: &str,
        generation: u64,
        state: Weak<Mutex<RegistryState>>,
    ) {
        let TickSource::Runtime { handle, period } = &self.source else {
            return;
        };

        // Deadlines count from placement, not from when the task first runs
        let first_tick = {
            let _runtime = handle.enter();
            tokio::time::Instant::now() + *period
        };

        let task = handle.spawn(task::run_tick_source(
            state,
            id.to_string(),
            generation,
            first_tick,
            *period,
        ));
        if let Some(previous) = self.tasks.insert(id.to_string(), task) {
            previous.abort();
        }
    }

    /// Cancel future ticks for a timer. Unknown ids are ignored.
    pub fn cancel(&mut self, id: &str) {
        if let Some(task) = self.tasks.remove(id) {
            task.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }

    /// Number of tick tasks still alive
    pub fn len(&self) -> usize {
        self.tasks.values().filter(|t| !t.is_finished()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_manual(&self) -> bool {
        matches!(self.source, TickSource::Manual)
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

//! Body of a per-timer tick task

use std::sync::{Mutex, Weak};
use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

use crate::registry::{RegistryState, lock_state};

/// Tick `id` at `first_tick` and then once per `period`, until the registry
/// is dropped or the entry no longer belongs to `generation`.
pub(super) async fn run_tick_source(
    state: Weak<Mutex<RegistryState>>,
    id: String,
    generation: u64,
    first_tick: Instant,
    period: Duration,
) {
    let mut interval = time::interval_at(first_tick, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let Some(state) = state.upgrade() else {
            break;
        };
        let applied = lock_state(&state).apply_scheduled_tick(&id, generation);
        if !applied {
            tracing::trace!(timer_id = %id, generation, "stale tick source exiting");
            break;
        }
    }
}

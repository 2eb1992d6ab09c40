//! Timer registry
//!
//! This module provides:
//! - **Timers**: Runtime state of one placed countup timer
//! - **Registry**: Insertion-ordered collection of active timers keyed by id
//! - **Formatting**: `MM:SS` rendering of elapsed seconds
//!
//! # Architecture
//!
//! ```text
//!   notify_placement(id)                        notify_removal(id)
//!          │                                            │
//!          ▼                                            ▼
//! ┌──────────────────────── Mutex<RegistryState> ──────────────────────┐
//! │  timers: IndexMap<id, CountupTimer>   scheduler: TickScheduler      │
//! │  add → insert + schedule        remove → cancel + stop + delete     │
//! └─────────────────────────────────────────────────────────────────────┘
//!          ▲                                            │
//!   tick task (one per id)                      all() / formatted(id)
//! ```

mod error;
mod format;
mod manager;
mod timer;


pub use error::RegistryError;
pub use format::format_elapsed;
pub use manager::TimerRegistry;
pub(crate) use manager::{RegistryState, lock_state};
pub use timer::CountupTimer;

//! Countup timer registry for placed AR timer labels
//!
//! The host scene reports placements and removals; the registry keeps one
//! countup timer per placement and hands back `MM:SS` strings to display.

pub mod bridge;
pub mod config;
pub mod identity;
pub mod input;
pub mod registry;
pub mod scheduler;

// Re-exports for convenience
pub use bridge::{
    PlacementEvent, PlacementListener, TimerDisplay, refresh_display, spawn_placement_pump,
};
pub use config::{ConfigError, MinutesDisplay, RegistryConfig, RegistryConfigExt};
pub use identity::new_timer_id;
pub use input::{TapDebouncer, TapOutcome, TapTarget, handle_tap};
pub use kitchen_timer_types::TimerSnapshot;
pub use registry::{CountupTimer, RegistryError, TimerRegistry, format_elapsed};
pub use scheduler::TickScheduler;

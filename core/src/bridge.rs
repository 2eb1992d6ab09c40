//! Interfaces between the registry and the presentation layer
//!
//! The host (scene, input handling, text geometry) never touches registry
//! state directly. It reports placements and removals inbound, and pulls
//! formatted values outbound to write into its own display objects.

use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

use crate::registry::{RegistryError, TimerRegistry};

// ─────────────────────────────────────────────────────────────────────────────
// Inbound
// ─────────────────────────────────────────────────────────────────────────────

/// Receives placement and removal notifications from the host
pub trait PlacementListener {
    /// A new timer object was placed in the scene under `id`
    fn notify_placement(&self, id: &str);

    /// The object placed under `id` was dismissed
    fn notify_removal(&self, id: &str);
}

impl PlacementListener for TimerRegistry {
    fn notify_placement(&self, id: &str) {
        if let Err(err @ RegistryError::DuplicateIdentifier { .. }) = self.add(id) {
            tracing::warn!(timer_id = %id, %err, "placement ignored");
        }
    }

    fn notify_removal(&self, id: &str) {
        self.remove(id);
    }
}

/// Message form of the inbound notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementEvent {
    Placed { id: String },
    Removed { id: String },
}

impl PlacementEvent {
    pub fn apply(&self, listener: &impl PlacementListener) {
        match self {
            PlacementEvent::Placed { id } => listener.notify_placement(id),
            PlacementEvent::Removed { id } => listener.notify_removal(id),
        }
    }
}

/// Apply events from `rx` to the registry in arrival order until every
/// sender is dropped.
pub fn spawn_placement_pump(
    registry: TimerRegistry,
    mut rx: Receiver<PlacementEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            event.apply(&registry);
        }
        tracing::debug!("placement channel closed");
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Outbound
// ─────────────────────────────────────────────────────────────────────────────

/// Host-side sink for per-frame timer text
pub trait TimerDisplay {
    fn update_timer(&mut self, id: &str, value: &str);
}

/// Push the current value of every active timer to `display`, in placement
/// order. Returns how many timers were written.
pub fn refresh_display(registry: &TimerRegistry, display: &mut impl TimerDisplay) -> usize {
    let snapshot = registry.all();
    for timer in &snapshot {
        display.update_timer(&timer.id, &timer.display);
    }
    snapshot.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchen_timer_types::RegistryConfig;
    use tokio::sync::mpsc;

    #[derive(Default)]
    struct RecordingDisplay {
        writes: Vec<(String, String)>,
    }

    impl TimerDisplay for RecordingDisplay {
        fn update_timer(&mut self, id: &str, value: &str) {
            self.writes.push((id.to_string(), value.to_string()));
        }
    }

    fn registry() -> TimerRegistry {
        TimerRegistry::manual(&RegistryConfig::default())
    }

    #[test]
    fn listener_maps_to_add_and_remove() {
        let registry = registry();
        registry.notify_placement("a");
        registry.notify_placement("b");
        registry.notify_removal("a");

        assert_eq!(registry.ids(), vec!["b"]);
    }

    #[test]
    fn duplicate_placement_keeps_original_timer() {
        let registry = registry();
        registry.notify_placement("a");
        registry.tick("a");
        registry.notify_placement("a");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.formatted("a").as_deref(), Some("00:01"));
    }

    #[test]
    fn refresh_writes_every_timer_in_order() {
        let registry = registry();
        registry.notify_placement("first");
        registry.notify_placement("second");
        registry.tick("second");

        let mut display = RecordingDisplay::default();
        assert_eq!(refresh_display(&registry, &mut display), 2);
        assert_eq!(
            display.writes,
            vec![
                ("first".to_string(), "00:00".to_string()),
                ("second".to_string(), "00:01".to_string()),
            ]
        );
    }

    #[test]
    fn refresh_on_empty_registry_writes_nothing() {
        let mut display = RecordingDisplay::default();
        assert_eq!(refresh_display(&registry(), &mut display), 0);
        assert!(display.writes.is_empty());
    }

    #[tokio::test]
    async fn pump_applies_events_in_order() {
        let registry = registry();
        let (tx, rx) = mpsc::channel(8);
        let pump = spawn_placement_pump(registry.clone(), rx);

        for event in [
            PlacementEvent::Placed { id: "a".into() },
            PlacementEvent::Placed { id: "b".into() },
            PlacementEvent::Removed { id: "a".into() },
            PlacementEvent::Removed { id: "never-placed".into() },
            PlacementEvent::Placed { id: "c".into() },
        ] {
            tx.send(event).await.unwrap();
        }
        drop(tx);
        pump.await.unwrap();

        assert_eq!(registry.ids(), vec!["b", "c"]);
    }
}

//! Tests for scheduled tick delivery
//!
//! Paused-clock tests let tokio auto-advance time to the next tick deadline.

use std::time::Duration;

use kitchen_timer_types::RegistryConfig;
use tokio::runtime::Handle;
use tokio::time;

use crate::registry::TimerRegistry;

fn scheduled() -> TimerRegistry {
    TimerRegistry::scheduled(&RegistryConfig::default(), Handle::current())
}

#[tokio::test(start_paused = true)]
async fn test_scheduled_timer_ticks_once_per_second() {
    let registry = scheduled();
    registry.add("t1").unwrap();
    assert_eq!(registry.formatted("t1").as_deref(), Some("00:00"));

    time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(registry.formatted("t1").as_deref(), Some("00:03"));

    time::sleep(Duration::from_secs(62)).await;
    assert_eq!(registry.formatted("t1").as_deref(), Some("01:05"));
}

#[tokio::test(start_paused = true)]
async fn test_remove_cancels_tick_source() {
    let registry = scheduled();
    registry.add("t1").unwrap();
    assert_eq!(registry.scheduled_len(), 1);

    time::sleep(Duration::from_millis(2_500)).await;
    registry.remove("t1");
    assert_eq!(registry.formatted("t1"), None);

    time::sleep(Duration::from_secs(5)).await;
    assert_eq!(registry.formatted("t1"), None);
    assert!(registry.is_empty());
    assert_eq!(registry.scheduled_len(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_reused_id_gets_a_single_fresh_source() {
    let registry = scheduled();
    registry.add("t1").unwrap();
    time::sleep(Duration::from_millis(2_500)).await;

    registry.remove("t1");
    registry.add("t1").unwrap();
    assert_eq!(registry.formatted("t1").as_deref(), Some("00:00"));

    time::sleep(Duration::from_millis(1_200)).await;
    assert_eq!(registry.formatted("t1").as_deref(), Some("00:01"));
    assert_eq!(registry.scheduled_len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_independent_sources_keep_insertion_order() {
    let registry = scheduled();
    registry.add("a").unwrap();
    time::sleep(Duration::from_millis(1_500)).await;
    registry.add("b").unwrap();
    time::sleep(Duration::from_millis(1_200)).await;

    let snapshot = registry.all();
    let pairs: Vec<_> = snapshot.iter().map(|s| s.as_pair()).collect();
    assert_eq!(pairs, vec![("a", "00:02"), ("b", "00:01")]);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_registry_ends_tick_tasks() {
    let registry = scheduled();
    registry.add("t1").unwrap();
    drop(registry);

    // Nothing left to tick; sleeping must not panic on a dangling source
    time::sleep(Duration::from_secs(3)).await;
}

#[tokio::test]
async fn test_first_tick_counts_from_add_not_first_poll() {
    let registry = scheduled();
    registry.add("t1").unwrap();

    // Keep the current-thread runtime busy so the tick task is not polled yet
    std::thread::sleep(Duration::from_millis(800));
    time::sleep(Duration::from_millis(500)).await;

    assert_eq!(registry.formatted("t1").as_deref(), Some("00:01"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_remove_racing_ticks_never_resurrects() {
    let config = RegistryConfig {
        tick_interval_ms: 1,
        ..Default::default()
    };
    let registry = TimerRegistry::scheduled(&config, Handle::current());

    for round in 0..50 {
        let id = format!("t{}", round % 5);
        registry.add(id.clone()).unwrap();
        tokio::task::yield_now().await;
        time::sleep(Duration::from_millis(2)).await;
        registry.remove(&id);
        assert_eq!(registry.formatted(&id), None);
    }

    time::sleep(Duration::from_millis(20)).await;
    assert!(registry.is_empty());
    assert_eq!(registry.scheduled_len(), 0);
}

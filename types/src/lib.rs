//! Shared configuration types for the kitchen timer
//!
//! This crate contains serializable types that are shared between the
//! registry (kitchen-timer-core) and any host that displays timers.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Snapshot Types
// ─────────────────────────────────────────────────────────────────────────────

/// Point-in-time view of one active timer, as handed to a display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub id: String,
    pub elapsed_secs: u64,
    /// Rendered `MM:SS` value
    pub display: String,
}

impl TimerSnapshot {
    /// Borrow as the `(id, formatted_value)` pair a display writes out
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.id, &self.display)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display Policy
// ─────────────────────────────────────────────────────────────────────────────

/// How the minutes field behaves once a timer passes 59:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinutesDisplay {
    /// Minutes keep counting: 3600s → "60:00"
    #[default]
    Unbounded,
    /// Minutes wrap at the hour: 3600s → "00:00"
    Wrap,
    /// Display stops at "59:59"
    Saturate,
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry Configuration
// ─────────────────────────────────────────────────────────────────────────────

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_id_prefix() -> String {
    "timer_".to_string()
}

fn default_tap_debounce_ms() -> u64 {
    1000
}

/// Runtime settings for the timer registry and its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Period of each timer's tick source
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default)]
    pub minutes_display: MinutesDisplay,

    /// Prefix for generated placement identifiers
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Taps arriving within this window of an accepted tap are ignored
    #[serde(default = "default_tap_debounce_ms")]
    pub tap_debounce_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            minutes_display: MinutesDisplay::default(),
            id_prefix: default_id_prefix(),
            tap_debounce_ms: default_tap_debounce_ms(),
        }
    }
}

impl RegistryConfig {
    pub fn tick_interval(&self) -> std::time::Duration {
        // A zero period would make tokio's interval panic
        std::time::Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn tap_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tap_debounce_ms)
    }
}

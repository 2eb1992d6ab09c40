//! Placement identifiers
//!
//! The registry never assigns ids. Hosts generate one per placement and
//! use it to name both the scene object and the timer.

use uuid::Uuid;

/// Fresh id of the form `{prefix}{UUID}`, e.g.
/// `timer_3F2504E0-4F89-41D3-9A0C-0305E82C3301`
pub fn new_timer_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().hyphenated().to_string().to_uppercase();
    format!("{prefix}{uuid}")
}

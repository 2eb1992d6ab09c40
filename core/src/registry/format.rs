//! `MM:SS` rendering of elapsed seconds

use kitchen_timer_types::MinutesDisplay;

/// Largest value shown under [`MinutesDisplay::Saturate`]
const SATURATE_SECS: u64 = 59 * 60 + 59;

/// Render elapsed seconds as zero-padded `MM:SS`.
///
/// There is no hour field. What happens past 59:59 is controlled by `minutes`:
/// - `Unbounded`: 3600 → "60:00", 6000 → "100:00"
/// - `Wrap`: 3600 → "00:00"
/// - `Saturate`: anything ≥ 3599 → "59:59"
pub fn format_elapsed(secs: u64, minutes: MinutesDisplay) -> String {
    let secs = match minutes {
        MinutesDisplay::Unbounded => secs,
        MinutesDisplay::Wrap => secs % 3600,
        MinutesDisplay::Saturate => secs.min(SATURATE_SECS),
    };
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

//! Duration formatting utilities.
//!
//! Score events carry a precomputed, human-readable form of their play time and elapsed time.
//! The same rendering is used when an event is built and when durations are displayed, so the
//! CSV export never has to re-derive them.

use std::time::Duration;

/// Renders a duration as hours, minutes and seconds, omitting leading zero units.
///
/// Sub-second precision is truncated.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use sarpedon::server::util::time::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
/// assert_eq!(format_duration(Duration::from_secs(125)), "2m5s");
/// assert_eq!(format_duration(Duration::from_millis(900)), "0s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

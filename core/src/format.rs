//! Clock-face formatting.

use crate::types::Seconds;

/// Render remaining time as zero-padded `MM:SS`.
///
/// Seconds are floored, never rounded: the face must not show a time the
/// player has not reached yet. Negative, zero and non-finite input all
/// render as `00:00`. Minutes are not capped, so 100 minutes is `100:00`.
pub fn format_clock(seconds: Seconds) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

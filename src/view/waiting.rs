//! Waiting-time display for referrals awaiting review.

use crate::model::{Timestamp, WallClock};

const MS_PER_HOUR: i64 = 1000 * 60 * 60;

/// "Waiting N hours" under a day, "Waiting N days" after, floor division.
///
/// Clock skew (created_at ahead of now) clamps to zero rather than
/// printing a negative duration.
pub fn format_waiting_time(created_at: Timestamp, now: WallClock) -> String {
    let elapsed_ms = created_at.elapsed_ms(now).max(0);
    let hours = elapsed_ms / MS_PER_HOUR;

    if hours < 24 {
        let unit = if hours == 1 { "hour" } else { "hours" };
        return format!("Waiting {hours} {unit}");
    }

    let days = hours / 24;
    let unit = if days == 1 { "day" } else { "days" };
    format!("Waiting {days} {unit}")
}

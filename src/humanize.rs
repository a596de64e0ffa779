use std::time::Duration;

/// Human-readable approximation of a duration (eg. "About a minute", "4 hours").
///
/// Buckets are coarse on purpose. Between one and two hours the hour count is
/// rounded with `hours + 0.5` truncated, so 90 minutes already reads "2 hours".
/// The years bucket uses the truncated hour count instead.
pub fn human_duration(d: Duration) -> String {
    let seconds = d.as_secs();
    if seconds < 1 {
        return "Less than a second".to_string();
    }
    if seconds == 1 {
        return "1 second".to_string();
    }
    if seconds < 60 {
        return format!("{} seconds", seconds);
    }

    let minutes = seconds / 60;
    if minutes == 1 {
        return "About a minute".to_string();
    }
    if minutes < 60 {
        return format!("{} minutes", minutes);
    }

    let exact_hours = d.as_secs_f64() / 3600.0;
    let hours = (exact_hours + 0.5) as u64;
    if hours == 1 {
        "About an hour".to_string()
    } else if hours < 48 {
        format!("{} hours", hours)
    } else if hours < 24 * 7 * 2 {
        format!("{} days", hours / 24)
    } else if hours < 24 * 30 * 2 {
        format!("{} weeks", hours / 24 / 7)
    } else if hours < 24 * 365 * 2 {
        format!("{} months", hours / 24 / 30)
    } else {
        format!("{} years", (exact_hours as u64) / 24 / 365)
    }
}

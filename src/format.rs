//! Display helpers for durations and distances.

/// Formats seconds as `"{h}h {m}m"`, or `"{m}m"` under an hour. Rounds down.
pub fn format_duration(seconds: f64) -> String {
    let minutes = if seconds.is_finite() && seconds > 0.0 {
        (seconds / 60.0).floor() as u64
    } else {
        0
    };
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

/// Formats meters as kilometers with one decimal place.
pub fn format_distance_km(meters: f64) -> String {
    format!("{:.1}", meters / 1000.0)
}

use chrono::{DateTime, Utc};

/// Short timestamp for journal and mood history ("Nov 14, 22:13").
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%b %d, %H:%M").to_string()
}

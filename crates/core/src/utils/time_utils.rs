use chrono::{DateTime, Utc};

use crate::constants::MONTH_KEY_FORMAT;

/// Calendar-month bucket (`YYYY-MM`) of a UTC instant.
pub fn month_key(instant: DateTime<Utc>) -> String {
    instant.format(MONTH_KEY_FORMAT).to_string()
}

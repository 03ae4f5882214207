use chrono::{DateTime, Utc};

/// Reads the host wall clock as a UTC instant.
#[must_use]
pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

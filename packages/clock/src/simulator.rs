//! Deterministic clock for tests.
//!
//! The simulator reads the host clock unless a fixed instant has been pinned
//! for the current thread with [`with_fixed_time`]. Pinned instants are scoped:
//! they apply only while the closure runs and nested scopes shadow outer ones.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "simulator")]
//! # {
//! use chrono::{TimeZone as _, Utc};
//! use utc_clock::simulator::with_fixed_time;
//!
//! let instant = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
//! let (date, time) = with_fixed_time(instant, utc_clock::now);
//!
//! assert_eq!(date.into_parts(), (2024, 2, 29));
//! assert_eq!(time.into_parts(), (12, 0, 0));
//! # }
//! ```

use chrono::{DateTime, Utc};
use scoped_tls::scoped_thread_local;

scoped_thread_local! {
    static FIXED_TIME: DateTime<Utc>
}

/// Runs `f` with the current thread's clock pinned to `instant`.
pub fn with_fixed_time<R>(instant: DateTime<Utc>, f: impl FnOnce() -> R) -> R {
    log::debug!("with_fixed_time: instant={instant}");
    FIXED_TIME.set(&instant, f)
}

/// The instant pinned for the current thread, if any.
#[must_use]
pub fn fixed_time() -> Option<DateTime<Utc>> {
    if FIXED_TIME.is_set() {
        Some(FIXED_TIME.with(|x| *x))
    } else {
        None
    }
}

/// Reads the pinned instant, falling back to the host wall clock.
#[must_use]
pub fn utc_now() -> DateTime<Utc> {
    fixed_time().unwrap_or_else(Utc::now)
}

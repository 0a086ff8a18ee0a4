//! Calendar date source for overdue checks.

use time::{Date, OffsetDateTime};

/// Today's date in the local offset, or UTC when the offset is unknown.
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

//! The 08:00–17:00 business-hours rule.
//!
//! The bounds are asymmetric. The opening bound is hour-granular: any
//! start whose hour is 8 or later passes. The closing bound is exact: the
//! end must be strictly before 17:00, or exactly 17:00:00 with nothing
//! after it. So 16:59 and 17:00:00 pass, and 17:00:01 and 17:01 fail.
//!
//! Only the local clock readings are compared. The rule does not look at
//! the date, so a window whose local end wraps past midnight is judged on
//! the clock value alone.

use chrono::{NaiveTime, Timelike};

/// First local hour at which a window may start.
pub const OPEN_HOUR: u32 = 8;

/// Local hour by which a window must have ended (inclusive at `:00:00`).
pub const CLOSE_HOUR: u32 = 17;

/// Whether a local start time satisfies the opening bound.
pub fn starts_after_open(start: NaiveTime) -> bool {
    start.hour() >= OPEN_HOUR
}

/// Whether a local end time satisfies the closing bound.
pub fn ends_by_close(end: NaiveTime) -> bool {
    end.hour() < CLOSE_HOUR
        || (end.hour() == CLOSE_HOUR
            && end.minute() == 0
            && end.second() == 0
            && end.nanosecond() == 0)
}

/// Whether a local start/end pair lies inside business hours.
///
/// ```
/// use chrono::NaiveTime;
/// use tz_scheduler::policy::is_compliant;
///
/// let t = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
/// assert!(is_compliant(t(8, 0, 0), t(17, 0, 0)));
/// assert!(!is_compliant(t(7, 59, 59), t(9, 0, 0)));
/// assert!(!is_compliant(t(16, 0, 0), t(17, 0, 1)));
/// ```
pub fn is_compliant(start: NaiveTime, end: NaiveTime) -> bool {
    starts_after_open(start) && ends_by_close(end)
}

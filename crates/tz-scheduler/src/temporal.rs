//! Timezone projection primitives.
//!
//! Every conversion from an absolute instant to a participant's wall clock
//! goes through this module. All functions take explicit inputs (no system
//! clock access); callers supply the "now" anchor where one is needed.
//!
//! # Timezone fallback
//!
//! [`resolve_zone`] is the single place where a participant's timezone
//! string is turned into a [`Tz`]. Missing, blank, and unknown names all
//! resolve to [`DEFAULT_ZONE`]; nothing in the crate fails because of a
//! bad participant timezone.

use chrono::{DateTime, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::SchedulingError;

/// Timezone used when a participant has none, or one the database does not know.
pub const DEFAULT_ZONE: Tz = Tz::UTC;

/// An absolute, timezone-independent point in time.
pub type Instant = DateTime<Utc>;

/// Parse an RFC 3339 datetime string into an [`Instant`].
///
/// Any offset is accepted; the result is normalized to UTC.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidDatetime`] if the string cannot be parsed.
///
/// # Examples
///
/// ```
/// use tz_scheduler::temporal::parse_instant;
///
/// let instant = parse_instant("2026-01-14T16:00:00+07:00").unwrap();
/// assert_eq!(instant.to_rfc3339(), "2026-01-14T09:00:00+00:00");
/// ```
pub fn parse_instant(s: &str) -> Result<Instant, SchedulingError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SchedulingError::InvalidDatetime(format!("'{}': {}", s, e)))
}

/// Parse an IANA timezone string into `Tz`, failing on unknown names.
///
/// Use this for configuration values. Participant timezones go through
/// [`resolve_zone`] instead, which never fails.
pub fn parse_timezone(s: &str) -> Result<Tz, SchedulingError> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| SchedulingError::InvalidTimezone(format!("'{}'", s)))
}

/// Resolve an optional timezone name, falling back to UTC.
///
/// ```
/// use tz_scheduler::temporal::resolve_zone;
///
/// assert_eq!(resolve_zone(Some("Asia/Jakarta")).name(), "Asia/Jakarta");
/// assert_eq!(resolve_zone(Some("")).name(), "UTC");
/// assert_eq!(resolve_zone(Some("Mars/Olympus_Mons")).name(), "UTC");
/// assert_eq!(resolve_zone(None).name(), "UTC");
/// ```
pub fn resolve_zone(name: Option<&str>) -> Tz {
    let name = match name.map(str::trim) {
        Some(n) if !n.is_empty() => n,
        _ => return DEFAULT_ZONE,
    };
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!(
                timezone = name,
                "unknown timezone, falling back to {}",
                DEFAULT_ZONE.name()
            );
            DEFAULT_ZONE
        }
    }
}

/// Project an instant onto the wall clock of `tz`.
pub fn project(instant: &Instant, tz: &Tz) -> DateTime<Tz> {
    instant.with_timezone(tz)
}

/// Midnight-anchored local calendar date of `instant` in `tz`.
pub fn local_date(instant: &Instant, tz: &Tz) -> NaiveDate {
    project(instant, tz).date_naive()
}

/// Build the instant at `hour:00` local time on `date` in `tz`.
///
/// Returns `None` when that wall-clock time is skipped or repeated by a DST
/// transition.
pub fn at_local_hour(date: NaiveDate, hour: u32, tz: &Tz) -> Option<Instant> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    tz.from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a local time as `HH:mm` (24-hour, zero-padded).
pub fn format_clock(dt: &DateTime<Tz>) -> String {
    dt.format("%H:%M").to_string()
}

/// Format the UTC offset as a string (e.g., "-05:00", "+09:00").
pub fn format_utc_offset<T: TimeZone>(dt: &DateTime<T>) -> String {
    let offset_secs = dt.offset().fix().local_minus_utc();
    let sign = if offset_secs >= 0 { "+" } else { "-" };
    let abs_secs = offset_secs.unsigned_abs();
    let hours = abs_secs / 3600;
    let minutes = (abs_secs % 3600) / 60;
    format!("{sign}{hours:02}:{minutes:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instant_normalizes_offset() {
        let instant = parse_instant("2026-01-14T04:00:00-05:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 1, 14, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        let err = parse_instant("next tuesday").unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidDatetime(_)));
    }

    #[test]
    fn test_parse_timezone_rejects_unknown() {
        assert!(parse_timezone("America/New_York").is_ok());
        assert!(matches!(
            parse_timezone("Not/AZone"),
            Err(SchedulingError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn test_resolve_zone_trims_whitespace() {
        assert_eq!(resolve_zone(Some("  Europe/Berlin ")), Tz::Europe__Berlin);
    }

    #[test]
    fn test_resolve_zone_falls_back_to_utc() {
        assert_eq!(resolve_zone(None), DEFAULT_ZONE);
        assert_eq!(resolve_zone(Some("   ")), DEFAULT_ZONE);
        assert_eq!(resolve_zone(Some("Atlantis/Capital")), DEFAULT_ZONE);
        assert_eq!(DEFAULT_ZONE.name(), "UTC");
    }

    #[test]
    fn test_format_clock_zero_pads() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 14, 1, 5, 0).unwrap();
        let local = project(&instant, &Tz::Asia__Jakarta);
        assert_eq!(format_clock(&local), "08:05");
    }

    #[test]
    fn test_format_utc_offset_follows_dst() {
        let winter = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap();
        let ny = Tz::America__New_York;
        assert_eq!(format_utc_offset(&project(&winter, &ny)), "-05:00");
        assert_eq!(format_utc_offset(&project(&summer, &ny)), "-04:00");
        assert_eq!(format_utc_offset(&project(&summer, &Tz::Asia__Kolkata)), "+05:30");
    }

    #[test]
    fn test_local_date_crosses_midnight() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 14, 20, 0, 0).unwrap();
        assert_eq!(
            local_date(&instant, &Tz::Asia__Tokyo),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_at_local_hour_skips_spring_forward_gap() {
        // 2026-03-08 02:00 does not exist in New York.
        let date = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
        assert!(at_local_hour(date, 2, &Tz::America__New_York).is_none());
        let nine = at_local_hour(date, 9, &Tz::America__New_York).unwrap();
        assert_eq!(nine, Utc.with_ymd_and_hms(2026, 3, 8, 13, 0, 0).unwrap());
    }
}

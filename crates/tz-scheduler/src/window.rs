//! Absolute time windows.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::SchedulingError;
use crate::temporal::{self, Instant};

/// A half-open interval of absolute time, `[start, end)`.
///
/// Always satisfies `end > start`; the constructors enforce it and the
/// fields are private so the invariant cannot be broken afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeWindow {
    start: Instant,
    end: Instant,
}

impl TimeWindow {
    /// Create a window from two instants.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidWindow`] if `end <= start`.
    pub fn new(start: Instant, end: Instant) -> Result<Self, SchedulingError> {
        if end <= start {
            return Err(SchedulingError::InvalidWindow {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse a window from two RFC 3339 strings.
    ///
    /// ```
    /// use tz_scheduler::TimeWindow;
    ///
    /// let w = TimeWindow::parse("2026-01-14T09:00:00Z", "2026-01-14T10:30:00Z").unwrap();
    /// assert_eq!(w.duration_minutes(), 90);
    /// assert!(TimeWindow::parse("2026-01-14T10:00:00Z", "2026-01-14T10:00:00Z").is_err());
    /// ```
    pub fn parse(start: &str, end: &str) -> Result<Self, SchedulingError> {
        Self::new(temporal::parse_instant(start)?, temporal::parse_instant(end)?)
    }

    /// Create a window starting at `start` and lasting `minutes`.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidDuration`] if `minutes` is not
    /// positive, or is so large that the end falls outside the representable
    /// date range.
    pub fn starting_at(start: Instant, minutes: i64) -> Result<Self, SchedulingError> {
        if minutes <= 0 {
            return Err(SchedulingError::InvalidDuration(format!(
                "duration must be positive, got {minutes} minutes"
            )));
        }
        let end = Duration::try_minutes(minutes)
            .and_then(|d| start.checked_add_signed(d))
            .ok_or_else(|| {
                SchedulingError::InvalidDuration(format!(
                    "duration of {minutes} minutes is out of range"
                ))
            })?;
        Self::new(start, end)
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whole minutes between start and end, rounded down.
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Both boundaries on the wall clock of `tz`.
    pub fn project(&self, tz: &Tz) -> (DateTime<Tz>, DateTime<Tz>) {
        (
            temporal::project(&self.start, tz),
            temporal::project(&self.end, tz),
        )
    }
}

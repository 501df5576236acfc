//! Alternative slot search.
//!
//! An exhaustive, deterministic scan over a small grid: each weekday in the
//! horizon, each whole-hour start from 08:00 to 16:00 on the reference
//! clock. A candidate survives only if it fits every participant. With the
//! default options that is at most 5 × 9 = 45 candidates.
//!
//! # Reference day
//!
//! Days are counted from the start of "today" on the reference clock, not
//! on each participant's clock. A slot on a reference weekday can therefore
//! land on a Saturday or Sunday for a participant far enough east or west.
//! Past hours of the current day are not skipped either; the grid always
//! starts at today's 08:00.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use chrono_tz::Tz;
use serde::Serialize;

use crate::compliance::fits_zone;
use crate::error::SchedulingError;
use crate::participant::{resolve_timezone, Participant};
use crate::policy;
use crate::temporal::{self, Instant};
use crate::window::TimeWindow;

/// First candidate start hour on the reference clock.
pub const FIRST_START_HOUR: u32 = policy::OPEN_HOUR;

/// Last candidate start hour on the reference clock.
pub const LAST_START_HOUR: u32 = policy::CLOSE_HOUR - 1;

/// Longest search horizon accepted, in calendar days.
pub const MAX_HORIZON_DAYS: u32 = 366;

/// Tuning for [`suggest_slots`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Calendar days scanned, starting with today. Weekend days count.
    /// [`suggest_slots`] never scans more than [`MAX_HORIZON_DAYS`].
    pub horizon_days: u32,
    /// Maximum number of slots returned.
    pub max_suggestions: usize,
    /// Clock that defines "today", weekdays, and candidate start hours.
    pub reference_timezone: Tz,
    /// Duration used when the caller does not give one.
    pub default_duration_minutes: i64,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            horizon_days: 5,
            max_suggestions: 10,
            reference_timezone: temporal::DEFAULT_ZONE,
            default_duration_minutes: 60,
        }
    }
}

impl SuggestOptions {
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidHorizon`] unless
    /// `1 <= days <= MAX_HORIZON_DAYS`.
    pub fn with_horizon_days(mut self, days: u32) -> Result<Self, SchedulingError> {
        if days == 0 || days > MAX_HORIZON_DAYS {
            return Err(SchedulingError::InvalidHorizon(format!(
                "horizon must be between 1 and {MAX_HORIZON_DAYS} days, got {days}"
            )));
        }
        self.horizon_days = days;
        Ok(self)
    }

    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Set the reference clock from an IANA name.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidTimezone`] for unknown names. Unlike
    /// participant timezones, a bad reference zone is a configuration error.
    pub fn with_reference_timezone(mut self, name: &str) -> Result<Self, SchedulingError> {
        self.reference_timezone = temporal::parse_timezone(name)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidDuration`] if `minutes` is not positive.
    pub fn with_default_duration(mut self, minutes: i64) -> Result<Self, SchedulingError> {
        if minutes <= 0 {
            return Err(SchedulingError::InvalidDuration(format!(
                "default duration must be positive, got {minutes} minutes"
            )));
        }
        self.default_duration_minutes = minutes;
        Ok(self)
    }
}

/// A proposed alternative window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedSlot {
    #[serde(flatten)]
    pub window: TimeWindow,
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Find slots of `duration_minutes` that fit every participant.
///
/// Slots come back in generation order (day-major, hour-minor), which is
/// chronological, capped at `options.max_suggestions`. An empty result
/// means the horizon holds no common slot.
///
/// `duration_minutes` must be positive; release builds return no slots
/// otherwise.
pub fn suggest_slots(
    participants: &[Participant],
    duration_minutes: i64,
    now: Instant,
    options: &SuggestOptions,
) -> Vec<SuggestedSlot> {
    debug_assert!(duration_minutes > 0, "duration must be positive");
    debug_assert!(!participants.is_empty(), "participant set must include the creator");

    let mut slots = Vec::new();
    if duration_minutes <= 0 || options.max_suggestions == 0 {
        return slots;
    }

    let reference = options.reference_timezone;
    let zones: Vec<Tz> = participants.iter().map(resolve_timezone).collect();
    let today = temporal::local_date(&now, &reference);

    'days: for day_offset in 0..options.horizon_days.min(MAX_HORIZON_DAYS) {
        let Some(day) = today.checked_add_days(Days::new(u64::from(day_offset))) else {
            break;
        };
        if is_weekend(day) {
            continue;
        }

        for hour in FIRST_START_HOUR..=LAST_START_HOUR {
            let Some(start) = temporal::at_local_hour(day, hour, &reference) else {
                continue;
            };
            let Ok(window) = TimeWindow::starting_at(start, duration_minutes) else {
                continue;
            };

            let reference_end = temporal::project(&window.end(), &reference);
            if !policy::ends_by_close(reference_end.time()) {
                continue;
            }
            if !zones.iter().all(|tz| fits_zone(&window, tz)) {
                continue;
            }

            slots.push(SuggestedSlot { window });
            if slots.len() >= options.max_suggestions {
                break 'days;
            }
        }
    }

    tracing::debug!(
        %now,
        duration_minutes,
        participants = participants.len(),
        found = slots.len(),
        "searched for alternative slots"
    );
    slots
}

//! Per-participant business-hours checks.
//!
//! [`evaluate`] projects a window into every participant's timezone and
//! applies [`crate::policy::is_compliant`] to the local boundaries. Results
//! carry the local times as `HH:mm` strings so they can be displayed as-is.

use chrono_tz::Tz;
use serde::Serialize;

use crate::participant::{resolve_timezone, Participant};
use crate::policy;
use crate::temporal::{format_clock, format_utc_offset};
use crate::window::TimeWindow;

/// One participant's view of a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceResult {
    /// The participant's display name.
    pub participant: String,
    /// The timezone the check used (after the UTC fallback).
    pub timezone: String,
    /// Local start, `HH:mm`.
    pub local_start: String,
    /// Local end, `HH:mm`.
    pub local_end: String,
    /// UTC offset at the window start (e.g., "+07:00").
    pub utc_offset: String,
    pub compliant: bool,
}

/// Outcome of checking a window against a participant set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    pub valid: bool,
    /// Failing participants, in the order they were supplied.
    pub conflicts: Vec<ComplianceResult>,
}

impl ConflictReport {
    fn from_results(results: impl IntoIterator<Item = ComplianceResult>) -> Self {
        let conflicts: Vec<_> = results.into_iter().filter(|r| !r.compliant).collect();
        Self {
            valid: conflicts.is_empty(),
            conflicts,
        }
    }
}

/// Check one participant.
pub fn check_participant(window: &TimeWindow, participant: &Participant) -> ComplianceResult {
    let tz = resolve_timezone(participant);
    let (start, end) = window.project(&tz);
    ComplianceResult {
        participant: participant.display_name.clone(),
        timezone: tz.name().to_string(),
        local_start: format_clock(&start),
        local_end: format_clock(&end),
        utc_offset: format_utc_offset(&start),
        compliant: policy::is_compliant(start.time(), end.time()),
    }
}

/// Whether `window` is inside business hours on the wall clock of `tz`.
///
/// Same decision as [`check_participant`] without building the display strings.
pub fn fits_zone(window: &TimeWindow, tz: &Tz) -> bool {
    let (start, end) = window.project(tz);
    policy::is_compliant(start.time(), end.time())
}

/// Check a window against every participant.
///
/// `valid` is true iff no participant conflicts. The participant set should
/// not be empty (the creator is always part of it).
pub fn evaluate(window: &TimeWindow, participants: &[Participant]) -> ConflictReport {
    debug_assert!(!participants.is_empty(), "participant set must include the creator");
    let report =
        ConflictReport::from_results(participants.iter().map(|p| check_participant(window, p)));
    tracing::debug!(
        start = %window.start(),
        end = %window.end(),
        participants = participants.len(),
        conflicts = report.conflicts.len(),
        "evaluated business hours"
    );
    report
}

//! Two-phase scheduling evaluation: validate, then search only on conflict.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::compliance::{self, ComplianceResult, ConflictReport};
use crate::error::SchedulingError;
use crate::participant::{resolve_participants, Participant, ParticipantDirectory};
use crate::suggest::{suggest_slots, SuggestOptions, SuggestedSlot};
use crate::temporal::Instant;
use crate::window::TimeWindow;

/// Result of [`SchedulingService::evaluate`].
///
/// Serializes as `{"valid": true}` or
/// `{"valid": false, "conflicts": [...], "suggestions": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Compliant,
    Conflicted {
        conflicts: Vec<ComplianceResult>,
        suggestions: Vec<SuggestedSlot>,
    },
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Evaluation::Compliant)
    }
}

impl Serialize for Evaluation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Evaluation::Compliant => {
                let mut st = serializer.serialize_struct("Evaluation", 1)?;
                st.serialize_field("valid", &true)?;
                st.end()
            }
            Evaluation::Conflicted {
                conflicts,
                suggestions,
            } => {
                let mut st = serializer.serialize_struct("Evaluation", 3)?;
                st.serialize_field("valid", &false)?;
                st.serialize_field("conflicts", conflicts)?;
                st.serialize_field("suggestions", suggestions)?;
                st.end()
            }
        }
    }
}

/// A scheduling request as it arrives from the transport layer.
///
/// Identifiers are unresolved and instants are RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub creator: String,
    #[serde(default)]
    pub participants: Vec<String>,
    pub start: String,
    pub end: String,
}

/// Entry point tying compliance checks and slot search together.
#[derive(Debug, Clone, Default)]
pub struct SchedulingService {
    options: SuggestOptions,
}

impl SchedulingService {
    pub fn new(options: SuggestOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SuggestOptions {
        &self.options
    }

    /// Check a window without searching for alternatives.
    pub fn check_compliance(
        &self,
        window: &TimeWindow,
        participants: &[Participant],
    ) -> ConflictReport {
        compliance::evaluate(window, participants)
    }

    /// Evaluate a window for a resolved participant list.
    ///
    /// The slot search runs only when at least one participant conflicts.
    /// Suggestions use the requested window's length, rounded up to whole
    /// minutes.
    pub fn evaluate(
        &self,
        window: &TimeWindow,
        participants: &[Participant],
        now: Instant,
    ) -> Evaluation {
        let report = compliance::evaluate(window, participants);
        if report.valid {
            return Evaluation::Compliant;
        }

        let suggestions = suggest_slots(participants, whole_minutes(window), now, &self.options);
        tracing::debug!(
            conflicts = report.conflicts.len(),
            suggestions = suggestions.len(),
            "window conflicts with business hours"
        );
        Evaluation::Conflicted {
            conflicts: report.conflicts,
            suggestions,
        }
    }

    /// Search for slots directly, defaulting the duration from the options.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidDuration`] for a non-positive
    /// duration, or one too long to represent from `now`.
    pub fn suggest_for(
        &self,
        participants: &[Participant],
        duration_minutes: Option<i64>,
        now: Instant,
    ) -> Result<Vec<SuggestedSlot>, SchedulingError> {
        let minutes = duration_minutes.unwrap_or(self.options.default_duration_minutes);
        TimeWindow::starting_at(now, minutes)?;
        Ok(suggest_slots(participants, minutes, now, &self.options))
    }

    /// Parse, resolve and evaluate a raw request.
    ///
    /// # Errors
    ///
    /// - [`SchedulingError::InvalidDatetime`] if either instant is malformed
    /// - [`SchedulingError::InvalidWindow`] if the end is not after the start
    /// - [`SchedulingError::UnresolvedParticipants`] if any identifier is unknown
    pub fn check_request<D>(
        &self,
        directory: &D,
        request: &ScheduleRequest,
        now: Instant,
    ) -> Result<Evaluation, SchedulingError>
    where
        D: ParticipantDirectory + ?Sized,
    {
        let window = TimeWindow::parse(&request.start, &request.end)?;
        let participants = resolve_participants(directory, &request.creator, &request.participants)?;
        Ok(self.evaluate(&window, &participants, now))
    }
}

fn whole_minutes(window: &TimeWindow) -> i64 {
    let seconds = window.duration().num_seconds();
    (seconds + 59) / 60
}

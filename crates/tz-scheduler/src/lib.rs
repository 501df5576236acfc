//! # tz-scheduler
//!
//! Business-hours constraint engine for meetings across timezones.
//!
//! Every participant has a preferred timezone, and a meeting must sit
//! inside 08:00–17:00 on each participant's own clock. This crate checks a
//! proposed window against that rule, reports exactly who conflicts and at
//! what local times, and searches the next few business days for windows
//! that work for everyone.
//!
//! All operations are pure: no I/O, no clock access. Callers pass the "now"
//! anchor explicitly and resolve participant identifiers through a
//! [`ParticipantDirectory`] before calling in.
//!
//! ## Modules
//!
//! - [`temporal`] - Instant parsing, timezone resolution and local projection
//! - [`window`] - Validated absolute time windows
//! - [`policy`] - The 08:00–17:00 compliance rule
//! - [`participant`] - Participants, directory lookup, timezone fallback
//! - [`compliance`] - Per-participant checks and conflict reports
//! - [`suggest`] - Bounded search for alternative slots
//! - [`service`] - Check first, search only on conflict
//! - [`error`] - Error types

pub mod compliance;
pub mod error;
pub mod participant;
pub mod policy;
pub mod service;
pub mod suggest;
pub mod temporal;
pub mod window;

pub use compliance::{check_participant, evaluate, ComplianceResult, ConflictReport};
pub use error::SchedulingError;
pub use participant::{
    resolve_participants, resolve_timezone, InMemoryDirectory, Participant, ParticipantDirectory,
};
pub use service::{Evaluation, ScheduleRequest, SchedulingService};
pub use suggest::{suggest_slots, SuggestOptions, SuggestedSlot};
pub use temporal::Instant;
pub use window::TimeWindow;

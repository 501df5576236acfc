//! Participants and the directory that resolves them.
//!
//! The core never looks identifiers up itself. Callers resolve them through
//! a [`ParticipantDirectory`] first (see [`resolve_participants`]) and hand
//! the typed list to the checker and suggester.

use std::collections::{HashMap, HashSet};

use chrono_tz::Tz;
use serde::Serialize;

use crate::error::SchedulingError;
use crate::temporal;

/// A person whose business hours constrain a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    /// Directory identifier (e.g., a username).
    pub id: String,
    /// Name shown in conflict reports.
    pub display_name: String,
    /// IANA timezone name as stored in the directory, if any.
    pub timezone: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<String>, timezone: Option<&str>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            timezone: timezone.map(str::to_string),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }
}

/// The participant's effective timezone: their own when set and known,
/// otherwise UTC.
///
/// Both the compliance checker and the slot suggester call this, so the
/// two always agree on where a participant is.
pub fn resolve_timezone(participant: &Participant) -> Tz {
    temporal::resolve_zone(participant.timezone.as_deref())
}

/// Lookup of participants by identifier.
pub trait ParticipantDirectory {
    /// Return the participant for `id`, or `None` if there is no such entry.
    fn lookup(&self, id: &str) -> Option<Participant>;
}

/// A fixed, in-memory directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    entries: HashMap<String, Participant>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `participant.id`.
    pub fn insert(&mut self, participant: Participant) {
        self.entries.insert(participant.id.clone(), participant);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Participant> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        let mut dir = Self::new();
        for p in iter {
            dir.insert(p);
        }
        dir
    }
}

impl ParticipantDirectory for InMemoryDirectory {
    fn lookup(&self, id: &str) -> Option<Participant> {
        self.entries.get(id).cloned()
    }
}

/// Resolve the creator and invited identifiers into an ordered participant list.
///
/// The creator comes first, followed by invitees in the order given.
/// Repeated identifiers (including the creator listed again as an invitee)
/// keep their first position only.
///
/// # Errors
///
/// Returns [`SchedulingError::UnresolvedParticipants`] listing every
/// identifier with no directory entry, in input order. Nothing is returned
/// for the resolvable ones: a request with any unknown participant is
/// rejected as a whole.
pub fn resolve_participants<D, S>(
    directory: &D,
    creator: &str,
    invited: &[S],
) -> Result<Vec<Participant>, SchedulingError>
where
    D: ParticipantDirectory + ?Sized,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();
    let mut missing = Vec::new();

    let ids = std::iter::once(creator).chain(invited.iter().map(|s| s.as_ref()));
    for id in ids {
        if !seen.insert(id) {
            continue;
        }
        match directory.lookup(id) {
            Some(p) => resolved.push(p),
            None => missing.push(id.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(SchedulingError::UnresolvedParticipants(missing));
    }
    Ok(resolved)
}

//! TOML configuration: scheduling options plus the user directory.
//!
//! ```toml
//! [scheduling]
//! reference_timezone = "UTC"
//! horizon_days = 5
//! max_suggestions = 10
//! default_duration_minutes = 60
//!
//! [[users]]
//! username = "budi"
//! name = "Budi Santoso"
//! timezone = "Asia/Jakarta"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tz_scheduler::{InMemoryDirectory, Participant, SuggestOptions};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scheduling: SchedulingConfig,
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulingConfig {
    pub reference_timezone: String,
    pub horizon_days: u32,
    pub max_suggestions: usize,
    pub default_duration_minutes: i64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        let defaults = SuggestOptions::default();
        Self {
            reference_timezone: defaults.reference_timezone.name().to_string(),
            horizon_days: defaults.horizon_days,
            max_suggestions: defaults.max_suggestions,
            default_duration_minutes: defaults.default_duration_minutes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl UserRecord {
    fn to_participant(&self) -> Participant {
        let p = Participant::new(self.username.clone(), self.timezone.as_deref());
        match &self.name {
            Some(name) => p.with_display_name(name.clone()),
            None => p,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("parse {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn suggest_options(&self) -> Result<SuggestOptions> {
        let s = &self.scheduling;
        let opts = SuggestOptions::default()
            .with_horizon_days(s.horizon_days)?
            .with_max_suggestions(s.max_suggestions)
            .with_reference_timezone(&s.reference_timezone)?
            .with_default_duration(s.default_duration_minutes)?;
        Ok(opts)
    }

    pub fn directory(&self) -> InMemoryDirectory {
        self.users.iter().map(UserRecord::to_participant).collect()
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tz_scheduler::temporal::parse_instant;
use tz_scheduler::{resolve_participants, Instant, ScheduleRequest, SchedulingService};

mod config;

use config::Config;

#[derive(Parser)]
#[command(
    name = "tzsched",
    version,
    about = "Check meeting windows against every participant's business hours"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args)]
struct Common {
    /// TOML file with [scheduling] options and [[users]] entries
    #[arg(long)]
    config: PathBuf,

    /// Username of the meeting creator
    #[arg(long)]
    creator: String,

    /// Invited username (repeatable)
    #[arg(long = "participant")]
    participants: Vec<String>,

    /// Anchor for the suggestion search (RFC 3339); defaults to the system clock
    #[arg(long)]
    now: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a window; on conflict, list conflicts and suggested slots
    Check {
        #[command(flatten)]
        common: Common,

        /// Window start (RFC 3339)
        #[arg(long)]
        start: String,

        /// Window end (RFC 3339)
        #[arg(long)]
        end: String,
    },

    /// List slots that fit every participant
    Suggest {
        #[command(flatten)]
        common: Common,

        /// Meeting length in minutes (default from config, else 60)
        #[arg(long)]
        duration: Option<i64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Check { common, start, end } => {
            let (config, service, now) = setup(&common)?;
            let request = ScheduleRequest {
                creator: common.creator,
                participants: common.participants,
                start,
                end,
            };
            let evaluation = service.check_request(&config.directory(), &request, now)?;
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
        }
        Command::Suggest { common, duration } => {
            let (config, service, now) = setup(&common)?;
            let participants =
                resolve_participants(&config.directory(), &common.creator, &common.participants)?;
            let slots = service.suggest_for(&participants, duration, now)?;
            println!("{}", serde_json::to_string_pretty(&slots)?);
        }
    }

    Ok(())
}

fn setup(common: &Common) -> Result<(Config, SchedulingService, Instant)> {
    let config = Config::load_from(&common.config)?;
    let service = SchedulingService::new(config.suggest_options()?);
    let now = match &common.now {
        Some(s) => parse_instant(s).context("--now")?,
        None => Utc::now(),
    };
    tracing::debug!(
        users = config.users.len(),
        %now,
        "loaded {}",
        common.config.display()
    );
    Ok((config, service, now))
}

use anyhow::Result;
use clap::Subcommand;
use media_utils::{crypto, filename, slug, time};
use serde::Serialize;
use tracing::{info, warn};

use crate::{config::Config, output::CommandOutput};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Formats a number of seconds as a human readable duration
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Generates time-seeded storage names for uploaded files
    HashName {
        #[arg(required = true)]
        filenames: Vec<String>,
    },
    /// Generates the unique hash of a track
    TrackHash {
        title: String,
        #[arg(long)]
        user_id: u64,
    },
    /// Builds the URL slug of a track
    Slug { id: u64, title: String },
    /// Checks that filenames carry an accepted audio extension
    CheckAudio {
        #[arg(required = true)]
        filenames: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
struct DurationData {
    seconds: i64,
    human: String,
}

#[derive(Debug, Serialize)]
struct HashedName {
    original: String,
    hashed: String,
}

#[derive(Debug, Serialize)]
struct TrackHashData {
    title: String,
    user_id: u64,
    hash: String,
}

#[derive(Debug, Serialize)]
struct SlugData {
    id: u64,
    title: String,
    slug: String,
}

#[derive(Debug, Serialize)]
struct AudioCheck {
    filename: String,
    accepted: bool,
}

pub fn run(command: Commands, config: &Config) -> Result<CommandOutput> {
    match command {
        Commands::Duration { seconds } => {
            let human = time::try_format_duration(seconds)?;
            CommandOutput::new(vec![human.clone()], &DurationData { seconds, human })
        }
        Commands::HashName { filenames } => {
            let hasher = config.filename_hasher();
            let names: Vec<HashedName> = filenames
                .into_iter()
                .map(|original| {
                    let hashed = hasher.hash(&filename::sanitize_filename(&original));
                    info!("Generated storage name {} for '{}'", hashed, original);
                    HashedName { original, hashed }
                })
                .collect();

            let lines = names.iter().map(|n| n.hashed.clone()).collect();
            CommandOutput::new(lines, &names)
        }
        Commands::TrackHash { title, user_id } => {
            let hash = crypto::track_hash(&title, user_id);
            CommandOutput::new(
                vec![hash.clone()],
                &TrackHashData {
                    title,
                    user_id,
                    hash,
                },
            )
        }
        Commands::Slug { id, title } => {
            let slug = slug::track_slug(id, &title);
            CommandOutput::new(vec![slug.clone()], &SlugData { id, title, slug })
        }
        Commands::CheckAudio { filenames } => {
            let allowed = &config.audio.allowed_extensions;
            let checks: Vec<AudioCheck> = filenames
                .into_iter()
                .map(|filename| {
                    let accepted = filename::has_allowed_extension(&filename, allowed);
                    if !accepted {
                        warn!("Rejected '{}': extension not in {:?}", filename, allowed);
                    }
                    AudioCheck { filename, accepted }
                })
                .collect();

            let lines = checks
                .iter()
                .map(|c| {
                    format!(
                        "{}: {}",
                        c.filename,
                        if c.accepted { "ok" } else { "rejected" }
                    )
                })
                .collect();
            let rejected = checks.iter().any(|c| !c.accepted);
            Ok(CommandOutput::new(lines, &checks)?.rejected(rejected))
        }
    }
}

//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::validators::parse_step;
use crate::constants::DEFAULT_SOURCE;
use crate::constants::freesound::API_KEY_ENV;
use crate::constants::slicer::OVERVIEW_STEP_SECS;

/// Fetch and slice short sound-effect clips.
#[derive(Debug, Parser)]
#[command(name = "sfxkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Options shared by all subcommands.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by all subcommands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Output directory (default: assets/audio).
    #[arg(short, long, global = true, env = "SFXKIT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Encoder binary (default: ffmpeg).
    #[arg(long, global = true, env = "SFXKIT_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// MP3 bitrate, e.g. 128k.
    #[arg(short, long, global = true)]
    pub bitrate: Option<String>,

    /// Suppress progress output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the top-rated Freesound match for each effect and convert it to MP3.
    Fetch {
        /// Freesound API key.
        #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
        api_key: Option<String>,
    },
    /// Cut eight effect clips out of a recording automatically.
    Slice {
        /// Source WAV file.
        #[arg(default_value = DEFAULT_SOURCE)]
        source: PathBuf,
    },
    /// Choose, preview and save each effect clip interactively.
    Pick {
        /// Source WAV file.
        #[arg(default_value = DEFAULT_SOURCE)]
        source: PathBuf,

        /// Where previews are rendered (default: temp_preview.wav).
        #[arg(long)]
        preview_path: Option<PathBuf>,
    },
    /// Show duration, sample rate, channels and bit depth of a WAV file.
    Info {
        /// Source WAV file.
        #[arg(default_value = DEFAULT_SOURCE)]
        source: PathBuf,
    },
    /// List fixed-length windows over a WAV file.
    Segments {
        /// Source WAV file.
        #[arg(default_value = DEFAULT_SOURCE)]
        source: PathBuf,

        /// Window length in seconds.
        #[arg(long, default_value_t = OVERVIEW_STEP_SECS, value_parser = parse_step)]
        step: f64,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

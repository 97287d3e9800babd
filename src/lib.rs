//! sfxkit - sound-effect acquisition and trimming CLI.
//!
//! Fetches effects from Freesound, or cuts them out of one long recording,
//! automatically or interactively. All encoding is done by an external
//! `ffmpeg` binary.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod effects;
pub mod encoder;
pub mod error;
pub mod fetcher;
pub mod picker;
pub mod slicer;
pub mod utils;

use std::io;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, GlobalArgs};
use config::{Config, config_file_path, load_default_config, save_default_config, validate_config};
use effects::{CLIP_EFFECTS, FETCH_EFFECTS};
use encoder::FfmpegEncoder;
use tracing::{debug, warn};

pub use error::{Error, Result};

/// Main entry point for the sfxkit CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet);

    // Remove partial downloads and previews on Ctrl+C
    if let Err(e) = ctrlc::set_handler(|| {
        utils::cleanup_all_temp_files();
        std::process::exit(130); // 128 + SIGINT(2)
    }) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }

    handle_command(cli.command, &cli.global)
}

fn handle_command(command: Command, global: &GlobalArgs) -> Result<()> {
    let progress = !global.quiet;

    match command {
        Command::Fetch { api_key } => {
            let config = resolve_config(global, |config| {
                if let Some(key) = api_key {
                    config.freesound.api_key = Some(key);
                }
            })?;
            handle_fetch(&config, progress)
        }
        Command::Slice { source } => {
            let config = resolve_config(global, |_| {})?;
            handle_slice(&source, &config, progress)
        }
        Command::Pick {
            source,
            preview_path,
        } => {
            let config = resolve_config(global, |config| {
                if let Some(path) = preview_path {
                    config.encoder.preview_path = path;
                }
            })?;
            handle_pick(&source, &config)
        }
        Command::Info { source } => handle_info(&source),
        Command::Segments { source, step } => handle_segments(&source, step),
        Command::Config { action } => handle_config_command(action),
    }
}

/// Load the config file, layer the command-line overrides on top and
/// validate the result.
fn resolve_config(global: &GlobalArgs, overrides: impl FnOnce(&mut Config)) -> Result<Config> {
    let mut config = load_default_config()?;
    apply_global_overrides(&mut config, global);
    overrides(&mut config);
    validate_config(&config)?;

    debug!("Encoder: {}", config.encoder.binary.display());
    Ok(config)
}

fn apply_global_overrides(config: &mut Config, global: &GlobalArgs) {
    if let Some(dir) = &global.output_dir {
        config.output.dir.clone_from(dir);
    }
    if let Some(bitrate) = &global.bitrate {
        config.output.bitrate.clone_from(bitrate);
    }
    if let Some(binary) = &global.ffmpeg {
        config.encoder.binary.clone_from(binary);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn handle_fetch(config: &Config, progress: bool) -> Result<()> {
    let fetch_settings = fetcher::FetchSettings {
        api_key: config.freesound.api_key.clone(),
        base_url: config.freesound.base_url.clone(),
        page_size: config.freesound.page_size,
        request_delay: Duration::from_millis(config.freesound.request_delay_ms),
        output_dir: config.output.dir.clone(),
        bitrate: config.output.bitrate.clone(),
        progress,
    };

    if fetcher::resolve_api_key(fetch_settings.api_key.as_deref()).is_err() {
        fetcher::print_setup_instructions(&mut io::stderr())?;
        return Err(Error::MissingApiKey);
    }

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create async runtime: {e}"),
    })?;

    let encoder = FfmpegEncoder::new(config.encoder.binary.clone());
    runtime.block_on(fetcher::command::execute(
        FETCH_EFFECTS,
        &fetch_settings,
        &encoder,
    ))?;
    Ok(())
}

fn handle_slice(source: &Path, config: &Config, progress: bool) -> Result<()> {
    let slice_settings = slicer::SliceSettings {
        output_dir: config.output.dir.clone(),
        bitrate: config.output.bitrate.clone(),
        progress,
    };

    let encoder = FfmpegEncoder::new(config.encoder.binary.clone());
    slicer::command::execute(source, CLIP_EFFECTS, &slice_settings, &encoder)?;
    Ok(())
}

fn handle_pick(source: &Path, config: &Config) -> Result<()> {
    let pick_settings = picker::PickSettings {
        output_dir: config.output.dir.clone(),
        bitrate: config.output.bitrate.clone(),
        preview_path: config.encoder.preview_path.clone(),
    };

    let encoder = FfmpegEncoder::new(config.encoder.binary.clone());
    picker::command::execute(
        source,
        CLIP_EFFECTS,
        &pick_settings,
        &encoder,
        io::stdin().lock(),
        io::stdout().lock(),
    )?;
    Ok(())
}

#[allow(clippy::print_stdout)]
fn handle_info(source: &Path) -> Result<()> {
    let info = audio::read_audio_info(source)?;

    println!("{}", source.display());
    println!("  Duration:    {:.2} s", info.duration);
    println!("  Sample rate: {} Hz", info.sample_rate);
    println!("  Channels:    {}", info.channels);
    println!("  Bit depth:   {} bit", info.bits_per_sample);
    println!("  Frames:      {}", info.frames);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn handle_segments(source: &Path, step: f64) -> Result<()> {
    let info = audio::read_audio_info(source)?;

    println!("{} ({:.2} s, {step} s windows)", source.display(), info.duration);
    for (i, window) in slicer::segment_overview(info.duration, step)
        .iter()
        .enumerate()
    {
        println!("  {:>3}: {window}", i + 1);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nNext steps:");
                println!(
                    "  Add your Freesound key under [freesound] api_key, then run 'sfxkit fetch'"
                );
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{:#?}", config.redacted());
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", config_file_path()?.display());
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn global(bitrate: Option<&str>, output_dir: Option<&str>, ffmpeg: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            output_dir: output_dir.map(PathBuf::from),
            ffmpeg: ffmpeg.map(PathBuf::from),
            bitrate: bitrate.map(ToString::to_string),
            quiet: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_global_overrides_replace_file_values() {
        let mut config = Config::default();
        let args = global(Some("192k"), Some("out"), Some("/opt/ffmpeg"));
        apply_global_overrides(&mut config, &args);

        assert_eq!(config.output.bitrate, "192k");
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.encoder.binary, PathBuf::from("/opt/ffmpeg"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_absent_overrides_keep_file_values() {
        let mut config = Config::default();
        config.output.bitrate = "96k".to_string();
        apply_global_overrides(&mut config, &global(None, None, None));

        assert_eq!(config.output.bitrate, "96k");
        assert_eq!(config.encoder.binary, PathBuf::from("ffmpeg"));
    }

    #[test]
    fn test_blank_overrides_fail_validation() {
        for args in [
            global(Some(""), None, None),
            global(Some("  "), None, None),
            global(None, Some(""), None),
            global(None, None, Some("")),
        ] {
            let mut config = Config::default();
            apply_global_overrides(&mut config, &args);
            assert!(matches!(
                validate_config(&config),
                Err(Error::ConfigValidation { .. })
            ));
        }
    }
}

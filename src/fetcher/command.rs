//! `fetch` command execution.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

use crate::constants::freesound::{API_KEY_ENV, API_KEY_PLACEHOLDER, TEMP_PREFIX};
use crate::effects::FetchEffect;
use crate::encoder::{EncodeJob, Encoder};
use crate::error::Result;
use crate::utils::{TempFile, ensure_output_dir};

use super::{FreesoundClient, SoundLibrary, resolve_api_key};

/// Settings for the `fetch` command.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// API key as configured; may be missing or the placeholder.
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Results requested per search.
    pub page_size: u32,
    /// Pause between effects.
    pub request_delay: Duration,
    /// Directory converted files are written to.
    pub output_dir: PathBuf,
    /// MP3 bitrate.
    pub bitrate: String,
    /// Show download progress bars.
    pub progress: bool,
}

/// Outcome of a fetch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    /// Files written, in table order.
    pub downloaded: Vec<PathBuf>,
    /// File names with no search results.
    pub skipped: Vec<String>,
    /// File names whose search, download or conversion failed.
    pub failed: Vec<String>,
}

enum FetchOutcome {
    Downloaded(PathBuf),
    NoResults,
}

/// Searches, downloads and converts each effect in turn.
pub struct Fetcher<L, E> {
    library: L,
    encoder: E,
    output_dir: PathBuf,
    bitrate: String,
    delay: Duration,
}

impl<L: SoundLibrary, E: Encoder> Fetcher<L, E> {
    /// Create a fetcher writing into `output_dir`.
    pub fn new(library: L, encoder: E, output_dir: &Path, bitrate: &str, delay: Duration) -> Self {
        Self {
            library,
            encoder,
            output_dir: output_dir.to_path_buf(),
            bitrate: bitrate.to_string(),
            delay,
        }
    }

    /// Process `effects` in order, pausing `delay` between them.
    ///
    /// A failing effect is logged and recorded; the rest still run.
    pub async fn run(&self, effects: &[FetchEffect]) -> FetchSummary {
        let mut summary = FetchSummary::default();

        for (index, effect) in effects.iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            match self.fetch_one(effect).await {
                Ok(FetchOutcome::Downloaded(path)) => {
                    info!("✓ {} done", effect.file_name);
                    summary.downloaded.push(path);
                }
                Ok(FetchOutcome::NoResults) => {
                    warn!("No results for {}, skipping", effect.description);
                    summary.skipped.push(effect.file_name.to_string());
                }
                Err(e) => {
                    warn!("✗ {} failed: {e}", effect.file_name);
                    summary.failed.push(effect.file_name.to_string());
                }
            }
        }

        summary
    }

    async fn fetch_one(&self, effect: &FetchEffect) -> Result<FetchOutcome> {
        info!("Searching for {}...", effect.description);
        let results = self
            .library
            .search(effect.query, effect.max_duration)
            .await?;

        let Some(sound) = results.first() else {
            return Ok(FetchOutcome::NoResults);
        };
        info!("Found: {} (#{})", sound.name, sound.id);

        let temp_path = self
            .output_dir
            .join(format!("{TEMP_PREFIX}{}", effect.file_name));
        let temp = TempFile::new(temp_path);
        self.library.download(sound, temp.path()).await?;

        let output = self.output_dir.join(effect.file_name);
        let job = EncodeJob::transcode(temp.path(), &output, &self.bitrate);
        self.encoder.encode(&job)?;

        Ok(FetchOutcome::Downloaded(output))
    }
}

/// Print how to obtain and configure an API key.
pub fn print_setup_instructions<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "A Freesound API key is required:")?;
    writeln!(out, "  1. Create an account at https://freesound.org/")?;
    writeln!(out, "  2. Request an API key at https://freesound.org/apiv2/apply/")?;
    writeln!(out, "  3. Pass it with --api-key, set {API_KEY_ENV}, or put it in the")?;
    writeln!(
        out,
        "     [freesound] api_key entry of the config file (replacing {API_KEY_PLACEHOLDER})"
    )?;
    Ok(())
}

/// Execute the `fetch` command.
///
/// The API key is checked before anything touches the network or the disk.
pub async fn execute<E: Encoder>(
    effects: &[FetchEffect],
    settings: &FetchSettings,
    encoder: E,
) -> Result<FetchSummary> {
    let api_key = resolve_api_key(settings.api_key.as_deref())?;

    ensure_output_dir(&settings.output_dir)?;
    let client = FreesoundClient::new(
        &settings.base_url,
        &api_key,
        settings.page_size,
        settings.progress,
    )?;

    info!("Fetching {} effects from Freesound", effects.len());
    let fetcher = Fetcher::new(
        client,
        encoder,
        &settings.output_dir,
        &settings.bitrate,
        settings.request_delay,
    );
    let summary = fetcher.run(effects).await;

    info!(
        "Complete: {} downloaded, {} without results, {} failed",
        summary.downloaded.len(),
        summary.skipped.len(),
        summary.failed.len()
    );
    info!("Check the Freesound license of each sound before shipping it");

    Ok(summary)
}

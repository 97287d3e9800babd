//! Streaming file download.

use std::borrow::Cow;
use std::path::Path;

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Download `url` to `dest`, sending `authorization` and showing progress.
pub async fn download_file(
    client: &Client,
    url: &str,
    authorization: &str,
    dest: &Path,
    progress: bool,
) -> Result<()> {
    let response = client
        .get(url)
        .header(AUTHORIZATION, authorization)
        .send()
        .await
        .map_err(|e| Error::DownloadFailed {
            url: url.to_string(),
            source: Box::new(e),
        })?;

    if !response.status().is_success() {
        return Err(Error::DownloadFailed {
            url: url.to_string(),
            source: format!("HTTP {}", response.status()).into(),
        });
    }

    let pb = if progress {
        let pb = ProgressBar::new(response.content_length().unwrap_or(0));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n{bar:40.cyan/blue} {percent}% ({bytes}/{total_bytes})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░ "),
        );
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message(format!(
        "Downloading {}...",
        dest.file_name()
            .map_or(Cow::Borrowed("file"), |n| n.to_string_lossy())
    ));

    let mut file = File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::DownloadFailed {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        file.write_all(&chunk).await?;

        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }
    file.flush().await?;

    pb.finish_and_clear();
    Ok(())
}

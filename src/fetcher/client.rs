//! Freesound API client.

use std::path::Path;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::download::download_file;
use super::types::{SearchResponse, SoundDetail, SoundSummary};
use crate::constants::freesound::{
    API_KEY_PLACEHOLDER, CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS, SEARCH_FIELDS, SEARCH_SORT,
};
use crate::error::{Error, Result};

/// A remote library of sounds that can be searched and downloaded from.
#[allow(async_fn_in_trait)]
pub trait SoundLibrary {
    /// Search for sounds no longer than `max_duration` seconds, best rated first.
    async fn search(&self, query: &str, max_duration: f64) -> Result<Vec<SoundSummary>>;

    /// Download the original file of `sound` to `dest`.
    async fn download(&self, sound: &SoundSummary, dest: &Path) -> Result<()>;
}

impl<L: SoundLibrary> SoundLibrary for &L {
    async fn search(&self, query: &str, max_duration: f64) -> Result<Vec<SoundSummary>> {
        (**self).search(query, max_duration).await
    }

    async fn download(&self, sound: &SoundSummary, dest: &Path) -> Result<()> {
        (**self).download(sound, dest).await
    }
}

/// Return the configured key, or [`Error::MissingApiKey`] if it is absent,
/// blank or still the template placeholder.
pub fn resolve_api_key(key: Option<&str>) -> Result<String> {
    match key.map(str::trim) {
        Some(key) if !key.is_empty() && key != API_KEY_PLACEHOLDER => Ok(key.to_string()),
        _ => Err(Error::MissingApiKey),
    }
}

/// Build the text-search URL for `query`.
pub fn search_url(base_url: &str, query: &str, max_duration: f64, page_size: u32) -> Result<Url> {
    let endpoint = format!("{}/search/text/", base_url.trim_end_matches('/'));
    let filter = format!("duration:[0 TO {max_duration}]");
    let page_size = page_size.to_string();

    Url::parse_with_params(
        &endpoint,
        [
            ("query", query),
            ("filter", filter.as_str()),
            ("fields", SEARCH_FIELDS),
            ("page_size", page_size.as_str()),
            ("sort", SEARCH_SORT),
        ],
    )
    .map_err(|e| Error::Request {
        url: endpoint,
        source: Box::new(e),
    })
}

/// Token-authenticated client for the Freesound API v2.
pub struct FreesoundClient {
    http: Client,
    base_url: String,
    authorization: String,
    page_size: u32,
    progress: bool,
}

impl FreesoundClient {
    /// Create a client. `api_key` must already be resolved.
    pub fn new(base_url: &str, api_key: &str, page_size: u32, progress: bool) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Internal {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization: format!("Token {api_key}"),
            page_size,
            progress,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {url}");
        let url_text = url.to_string();

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::Request {
                url: url_text.clone(),
                source: Box::new(e),
            })?;

        let body = response.bytes().await.map_err(|e| Error::Request {
            url: url_text.clone(),
            source: Box::new(e),
        })?;

        serde_json::from_slice(&body).map_err(|e| Error::ResponseParse {
            url: url_text,
            source: e,
        })
    }
}

impl SoundLibrary for FreesoundClient {
    async fn search(&self, query: &str, max_duration: f64) -> Result<Vec<SoundSummary>> {
        let url = search_url(&self.base_url, query, max_duration, self.page_size)?;
        let response: SearchResponse = self.get_json(url).await?;
        debug!(
            "{} matches for '{query}', {} on this page",
            response.count,
            response.results.len()
        );
        Ok(response.results)
    }

    async fn download(&self, sound: &SoundSummary, dest: &Path) -> Result<()> {
        let detail_url = format!("{}/sounds/{}/", self.base_url, sound.id);
        let url = Url::parse(&detail_url).map_err(|e| Error::Request {
            url: detail_url.clone(),
            source: Box::new(e),
        })?;

        let detail: SoundDetail = self.get_json(url).await?;
        download_file(
            &self.http,
            &detail.download,
            &self.authorization,
            dest,
            self.progress,
        )
        .await
    }
}

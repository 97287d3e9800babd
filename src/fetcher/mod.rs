//! Downloading effects from the Freesound sound library.

mod client;
pub mod command;
mod download;
mod types;

pub use client::{FreesoundClient, SoundLibrary, resolve_api_key, search_url};
pub use command::{FetchSettings, FetchSummary, Fetcher, print_setup_instructions};
pub use download::download_file;
pub use types::{SearchResponse, SoundDetail, SoundSummary};

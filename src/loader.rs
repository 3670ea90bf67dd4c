//! Profile loader.
//!
//! `load()` runs the two-step fetch sequence behind every page view:
//!
//! 1. Read the profile document (local file or URL). Any failure here is
//!    fatal for the view and step 2 is never attempted.
//! 2. Fetch video metadata keyed by `profile.socials.youtube`. Failure here
//!    is caught independently and degrades to "no video section".
//!
//! There are no retries and no cancellation; a reload is a fresh `load()`
//! from the start.

use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::config::Settings;
use crate::http_client::HttpClient;
use crate::models::{Profile, VideoMetadata, VideoResponse};

/// Where the profile document comes from.
#[derive(Debug, Clone)]
pub enum ProfileSource {
    File(PathBuf),
    Url(String),
}

impl ProfileSource {
    /// Interpret a settings value as a URL or a local path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

/// Errors from the load sequence. Shown to the user as a plain message.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read profile document {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("invalid JSON in {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid video metadata URL: {0}")]
    BadEndpoint(#[from] url::ParseError),
}

/// Everything the renderer needs, as an explicit state enumeration.
#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Failed { message: String },
    Loaded {
        profile: Profile,
        video: Option<VideoMetadata>,
    },
}

/// Runs the fetch sequence for one page view.
pub struct ProfileLoader {
    client: HttpClient,
    source: ProfileSource,
    video_api_url: String,
}

impl ProfileLoader {
    /// Create a loader from settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: HttpClient::new(settings.request_timeout(), &settings.user_agent),
            source: ProfileSource::parse(&settings.profile_path),
            video_api_url: settings.video_api_url.clone(),
        }
    }

    /// Run the full load sequence and return the terminal view state.
    pub async fn load(&self) -> ViewState {
        let profile = match self.fetch_profile().await {
            Ok(profile) => profile,
            Err(e) => {
                return ViewState::Failed {
                    message: e.to_string(),
                }
            }
        };

        let video = match self.fetch_video(&profile.socials.youtube).await {
            Ok(video) => video,
            Err(e) => {
                warn!("video metadata unavailable: {}", e);
                None
            }
        };

        ViewState::Loaded { profile, video }
    }

    /// Fetch and decode the profile document. Fatal on failure.
    pub async fn fetch_profile(&self) -> Result<Profile, LoadError> {
        let body = self.read_document().await?;
        serde_json::from_str(&body).map_err(|source| LoadError::Decode {
            what: "profile document".to_string(),
            source,
        })
    }

    /// Read the raw profile document without decoding it.
    pub async fn read_document(&self) -> Result<String, LoadError> {
        match &self.source {
            ProfileSource::File(path) => read_file(path).await,
            ProfileSource::Url(url) => {
                let response = self
                    .client
                    .get(url)
                    .await
                    .map_err(|source| LoadError::Http {
                        url: url.clone(),
                        source,
                    })?;
                if !response.status.is_success() {
                    return Err(LoadError::Status {
                        url: url.clone(),
                        status: response.status,
                    });
                }
                Ok(response.body)
            }
        }
    }

    /// Fetch video metadata for a channel. Best-effort; callers treat any
    /// error as "no video section".
    pub async fn fetch_video(&self, channel_id: &str) -> Result<Option<VideoMetadata>, LoadError> {
        if self.video_api_url.is_empty() || channel_id.is_empty() {
            debug!("video metadata fetch skipped (no endpoint or channel configured)");
            return Ok(None);
        }

        let url = Url::parse_with_params(&self.video_api_url, [("youtube", channel_id)])?;
        let url = url.to_string();

        let response = self
            .client
            .get(&url)
            .await
            .map_err(|source| LoadError::Http {
                url: url.clone(),
                source,
            })?;
        if !response.status.is_success() {
            return Err(LoadError::Status {
                url,
                status: response.status,
            });
        }

        let decoded: VideoResponse =
            serde_json::from_str(&response.body).map_err(|source| LoadError::Decode {
                what: "video metadata response".to_string(),
                source,
            })?;
        Ok(Some(decoded.video))
    }
}

async fn read_file(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })
}

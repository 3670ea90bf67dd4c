//! Configuration management for linkbio.
//!
//! Settings come from a TOML file (`linkbio.toml`, auto-discovered in the
//! working directory or passed via `--config`), with environment variable
//! overrides applied on top.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default bind address for the web server.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Default video metadata endpoint, matching the hosted profile page this
/// tool replaces. Set `video_api_url = ""` to disable the video section.
pub const DEFAULT_VIDEO_API: &str =
    "https://blade66.vercel.app/api/66f07ec7-0668-4912-baaf-848e7673c261";

/// Runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Profile document location: a local path or an http(s) URL.
    pub profile_path: String,
    /// Video metadata endpoint. Empty disables the metadata fetch.
    pub video_api_url: String,
    /// Default bind address for `linkbio serve`.
    pub bind: String,
    /// Outbound request timeout in seconds.
    pub request_timeout_secs: u64,
    /// User agent for outbound requests.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile_path: "json/profile.json".to_string(),
            video_api_url: DEFAULT_VIDEO_API.to_string(),
            bind: DEFAULT_BIND.to_string(),
            request_timeout_secs: 10,
            user_agent: crate::http_client::USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply environment variable overrides.
    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("LINKBIO_PROFILE") {
            if !v.is_empty() {
                self.profile_path = v;
            }
        }
        if let Ok(v) = std::env::var("LINKBIO_VIDEO_API") {
            self.video_api_url = v;
        }
        if let Ok(v) = std::env::var("LINKBIO_BIND") {
            if !v.is_empty() {
                self.bind = v;
            }
        }
    }
}

/// Load settings from the given config file, or discover `linkbio.toml` in
/// the working directory. Missing config files yield defaults.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match config_path {
        Some(path) => read_settings_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => {
            let discovered = Path::new("linkbio.toml");
            if discovered.exists() {
                read_settings_file(discovered)
                    .context("failed to load config from linkbio.toml")?
            } else {
                Settings::default()
            }
        }
    };

    settings.apply_env();
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let contents = std::fs::read_to_string(path)?;
    let settings = toml::from_str(&contents)?;
    Ok(settings)
}

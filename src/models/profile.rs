//! Profile document model.
//!
//! The profile document is a static JSON file describing the page owner's
//! identity and outbound links. It is immutable once loaded and re-read for
//! every page view.

use serde::{Deserialize, Serialize};

/// The page owner's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub handle: String,
    pub pronouns: String,
    pub bio: String,
    /// Avatar and banner image URLs. The document stores these under a
    /// nested `profile` key.
    #[serde(rename = "profile")]
    pub images: ProfileImages,
    pub socials: Socials,
}

/// Avatar and banner image URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileImages {
    pub pfp: String,
    pub banner: String,
}

/// Stored handles and IDs for outbound social links.
///
/// Values are interpolated into link templates as-is; an empty string means
/// the platform is not configured and its link is omitted from the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default)]
    pub youtube: String,
    #[serde(default)]
    pub twitch: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub throne: String,
    #[serde(default)]
    pub discord: String,
}

//! Outbound social link construction.
//!
//! Each platform has a fixed URL template; the stored handle or ID is
//! interpolated as-is, with no validation beyond string interpolation.
//! Platforms with an empty stored value are omitted.

use crate::models::Socials;

/// Supported social platforms, in page display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    YouTube,
    Twitch,
    Instagram,
    Twitter,
    Throne,
    Discord,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::YouTube,
        Platform::Twitch,
        Platform::Instagram,
        Platform::Twitter,
        Platform::Throne,
        Platform::Discord,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::Twitch => "Twitch",
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Throne => "Throne",
            Self::Discord => "Discord",
        }
    }

    /// CSS class suffix for the link tile.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::Twitch => "twitch",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Throne => "throne",
            Self::Discord => "discord",
        }
    }

    /// Stored handle or ID for this platform.
    pub fn value<'a>(&self, socials: &'a Socials) -> &'a str {
        match self {
            Self::YouTube => &socials.youtube,
            Self::Twitch => &socials.twitch,
            Self::Instagram => &socials.instagram,
            Self::Twitter => &socials.twitter,
            Self::Throne => &socials.throne,
            Self::Discord => &socials.discord,
        }
    }

    /// Canonical outbound URL for a stored value.
    pub fn url(&self, value: &str) -> String {
        match self {
            Self::YouTube => format!("https://youtube.com/channel/{}", value),
            Self::Twitch => format!("https://twitch.tv/{}", value),
            Self::Instagram => format!("https://instagram.com/{}", value),
            Self::Twitter => format!("https://twitter.com/{}", value),
            Self::Throne => format!("https://throne.com/{}", value),
            Self::Discord => format!("https://discord.com/users/{}", value),
        }
    }
}

/// A rendered outbound link.
#[derive(Debug, Clone)]
pub struct SocialLink {
    pub label: &'static str,
    pub slug: &'static str,
    pub href: String,
}

/// Build the outbound links for a profile, skipping unconfigured platforms.
pub fn social_links(socials: &Socials) -> Vec<SocialLink> {
    Platform::ALL
        .iter()
        .filter_map(|platform| {
            let value = platform.value(socials);
            if value.is_empty() {
                return None;
            }
            Some(SocialLink {
                label: platform.label(),
                slug: platform.slug(),
                href: platform.url(value),
            })
        })
        .collect()
}

//! Video metadata model.
//!
//! Best-effort enrichment about the page owner's most recent video. The
//! metadata endpoint nests the payload under a top-level `video` key; that
//! shape is the contract, and a response without it is treated as any other
//! metadata failure (the section is omitted from the page).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Response envelope from the video metadata endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoResponse {
    pub video: VideoMetadata,
}

/// Metadata for a single video.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    #[serde(deserialize_with = "count_from_string_or_number")]
    pub view_count: u64,
    #[serde(deserialize_with = "count_from_string_or_number")]
    pub like_count: u64,
    #[serde(deserialize_with = "count_from_string_or_number")]
    pub comment_count: u64,
    pub published_at: DateTime<Utc>,
}

/// Upstream sends count fields as either JSON numbers or decimal strings.
fn count_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_envelope_with_numeric_counts() {
        let json = r#"{
            "video": {
                "id": "dQw4w9WgXcQ",
                "title": "My Latest Video",
                "thumbnail": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq720.jpg",
                "viewCount": 12345,
                "likeCount": 678,
                "commentCount": 90,
                "publishedAt": "2024-05-01T12:00:00Z"
            }
        }"#;

        let resp: VideoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.video.id, "dQw4w9WgXcQ");
        assert_eq!(resp.video.view_count, 12345);
        assert_eq!(resp.video.published_at.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn test_counts_accept_decimal_strings() {
        let json = r#"{
            "video": {
                "id": "x",
                "title": "t",
                "thumbnail": "u",
                "viewCount": "12345",
                "likeCount": "678",
                "commentCount": "0",
                "publishedAt": "2024-05-01T12:00:00Z"
            }
        }"#;

        let resp: VideoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.video.view_count, 12345);
        assert_eq!(resp.video.like_count, 678);
        assert_eq!(resp.video.comment_count, 0);
    }

    #[test]
    fn test_flat_response_is_rejected() {
        // The flat (no `video` key) shape seen in older revisions of the
        // upstream API is not part of the contract.
        let json = r#"{
            "id": "x",
            "title": "t",
            "thumbnail": "u",
            "viewCount": 1,
            "likeCount": 2,
            "commentCount": 3,
            "publishedAt": "2024-05-01T12:00:00Z"
        }"#;

        assert!(serde_json::from_str::<VideoResponse>(json).is_err());
    }

    #[test]
    fn test_non_numeric_count_string_is_rejected() {
        let json = r#"{
            "video": {
                "id": "x",
                "title": "t",
                "thumbnail": "u",
                "viewCount": "lots",
                "likeCount": 2,
                "commentCount": 3,
                "publishedAt": "2024-05-01T12:00:00Z"
            }
        }"#;

        assert!(serde_json::from_str::<VideoResponse>(json).is_err());
    }
}

//! Data models for linkbio.

mod profile;
mod video;

pub use profile::{Profile, ProfileImages, Socials};
pub use video::{VideoMetadata, VideoResponse};

//! Askama template structs for the profile page.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! The renderer is a pure function of `ViewState`; every field the templates
//! need is flattened here so the templates stay free of logic.

use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;

use crate::links::{social_links, SocialLink};
use crate::loader::ViewState;
use crate::models::{Profile, VideoMetadata};
use crate::utils::{format_count, format_date};

/// Loaded profile page.
#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate<'a> {
    pub title: String,
    pub username: &'a str,
    pub handle: &'a str,
    pub pronouns: &'a str,
    pub bio: &'a str,
    pub pfp: &'a str,
    pub banner: &'a str,
    pub links: Vec<SocialLink>,
    pub has_video: bool,
    pub video_url: String,
    pub video_title: String,
    pub video_thumbnail: String,
    pub video_views: String,
    pub video_likes: String,
    pub video_comments: String,
    pub video_published: String,
}

/// Full-page error view with a manual retry link.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

/// Placeholder shown before a load has completed.
#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate;

impl<'a> ProfileTemplate<'a> {
    pub fn new(profile: &'a Profile, video: Option<&VideoMetadata>) -> Self {
        let (
            video_url,
            video_title,
            video_thumbnail,
            video_views,
            video_likes,
            video_comments,
            video_published,
        ) = match video {
            Some(v) => (
                format!("https://youtube.com/watch?v={}", v.id),
                v.title.clone(),
                v.thumbnail.clone(),
                format_count(v.view_count),
                format_count(v.like_count),
                format_count(v.comment_count),
                format_date(&v.published_at),
            ),
            None => Default::default(),
        };

        Self {
            title: format!("{} - Profile", profile.username),
            username: &profile.username,
            handle: &profile.handle,
            pronouns: &profile.pronouns,
            bio: &profile.bio,
            pfp: &profile.images.pfp,
            banner: &profile.images.banner,
            links: social_links(&profile.socials),
            has_video: video.is_some(),
            video_url,
            video_title,
            video_thumbnail,
            video_views,
            video_likes,
            video_comments,
            video_published,
        }
    }
}

/// Render a view state to HTML with the matching HTTP status.
pub fn render_state(state: &ViewState) -> (StatusCode, Html<String>) {
    match state {
        ViewState::Loading => {
            let template = LoadingTemplate;
            (
                StatusCode::OK,
                Html(template.render().unwrap_or_else(|_| "Loading...".to_string())),
            )
        }
        ViewState::Failed { message } => {
            let template = ErrorTemplate {
                title: "Error",
                message,
            };
            (
                StatusCode::BAD_GATEWAY,
                Html(template.render().unwrap_or_else(|_| message.clone())),
            )
        }
        ViewState::Loaded { profile, video } => {
            let template = ProfileTemplate::new(profile, video.as_ref());
            (
                StatusCode::OK,
                Html(
                    template
                        .render()
                        .unwrap_or_else(|e| format!("template error: {}", e)),
                ),
            )
        }
    }
}

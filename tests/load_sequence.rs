//! End-to-end tests for the profile load sequence against stub upstreams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use linkbio::config::Settings;
use linkbio::loader::{ProfileLoader, ViewState};

const PROFILE_JSON: &str = r#"{
    "username": "Blade",
    "handle": "@blade66",
    "pronouns": "she/her",
    "bio": "streamer and video maker",
    "profile": {
        "pfp": "https://cdn.example.com/pfp.png",
        "banner": "https://cdn.example.com/banner.png"
    },
    "socials": {
        "youtube": "UCabc123",
        "twitch": "blade66",
        "instagram": "",
        "twitter": "",
        "throne": "",
        "discord": "abc123"
    }
}"#;

const VIDEO_JSON: &str = r#"{
    "video": {
        "id": "vid1",
        "title": "My Latest Video",
        "thumbnail": "https://i.ytimg.com/vi/vid1/hq720.jpg",
        "viewCount": "12345",
        "likeCount": 678,
        "commentCount": 9,
        "publishedAt": "2024-05-01T12:00:00Z"
    }
}"#;

/// A stub upstream that serves a scripted sequence of responses and records
/// how it was called.
#[derive(Clone)]
struct StubState {
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
    responses: Arc<Vec<(StatusCode, String)>>,
}

async fn stub_handler(
    State(state): State<StubState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let n = state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = query;
    let idx = n.min(state.responses.len() - 1);
    state.responses[idx].clone()
}

/// Bind a stub server on an ephemeral port and return its base URL.
async fn spawn_stub(responses: Vec<(StatusCode, &str)>) -> (String, StubState) {
    let state = StubState {
        hits: Arc::new(AtomicUsize::new(0)),
        last_query: Arc::new(Mutex::new(None)),
        responses: Arc::new(
            responses
                .into_iter()
                .map(|(status, body)| (status, body.to_string()))
                .collect(),
        ),
    };

    let app = Router::new()
        .route("/", get(stub_handler))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/", addr), state)
}

fn settings(profile_path: String, video_api_url: String) -> Settings {
    Settings {
        profile_path,
        video_api_url,
        ..Settings::default()
    }
}

#[tokio::test]
async fn test_profile_failure_skips_metadata_fetch() {
    let (profile_url, _profile_stub) = spawn_stub(vec![(StatusCode::NOT_FOUND, "gone")]).await;
    let (video_url, video_stub) = spawn_stub(vec![(StatusCode::OK, VIDEO_JSON)]).await;

    let loader = ProfileLoader::new(&settings(profile_url, video_url));

    match loader.load().await {
        ViewState::Failed { message } => {
            assert!(message.contains("404"), "message was: {}", message);
        }
        other => panic!("expected Failed, got {:?}", other),
    }

    // Step 2 must never run when step 1 fails.
    assert_eq!(video_stub.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_metadata_failure_degrades_to_no_video() {
    let (profile_url, _profile_stub) = spawn_stub(vec![(StatusCode::OK, PROFILE_JSON)]).await;
    let (video_url, video_stub) =
        spawn_stub(vec![(StatusCode::INTERNAL_SERVER_ERROR, "oops")]).await;

    let loader = ProfileLoader::new(&settings(profile_url, video_url));

    match loader.load().await {
        ViewState::Loaded { profile, video } => {
            assert_eq!(profile.username, "Blade");
            assert!(video.is_none());
        }
        other => panic!("expected Loaded, got {:?}", other),
    }

    assert_eq!(video_stub.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_metadata_success_is_keyed_by_profile_channel() {
    let (profile_url, _profile_stub) = spawn_stub(vec![(StatusCode::OK, PROFILE_JSON)]).await;
    let (video_url, video_stub) = spawn_stub(vec![(StatusCode::OK, VIDEO_JSON)]).await;

    let loader = ProfileLoader::new(&settings(profile_url, video_url));

    match loader.load().await {
        ViewState::Loaded { video, .. } => {
            let video = video.expect("video metadata should be present");
            assert_eq!(video.title, "My Latest Video");
            assert_eq!(video.view_count, 12345);
            assert_eq!(video.like_count, 678);
        }
        other => panic!("expected Loaded, got {:?}", other),
    }

    let query = video_stub.last_query.lock().unwrap().clone();
    assert_eq!(query.as_deref(), Some("youtube=UCabc123"));
}

#[tokio::test]
async fn test_unparseable_metadata_degrades_to_no_video() {
    let (profile_url, _profile_stub) = spawn_stub(vec![(StatusCode::OK, PROFILE_JSON)]).await;
    // Flat shape (no `video` envelope) is outside the contract.
    let (video_url, _video_stub) =
        spawn_stub(vec![(StatusCode::OK, r#"{"id": "x", "title": "t"}"#)]).await;

    let loader = ProfileLoader::new(&settings(profile_url, video_url));

    match loader.load().await {
        ViewState::Loaded { video, .. } => assert!(video.is_none()),
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reload_reattempts_full_sequence() {
    let (profile_url, profile_stub) = spawn_stub(vec![
        (StatusCode::NOT_FOUND, "gone"),
        (StatusCode::OK, PROFILE_JSON),
    ])
    .await;

    let loader = ProfileLoader::new(&settings(profile_url, String::new()));

    match loader.load().await {
        ViewState::Failed { .. } => {}
        other => panic!("expected Failed, got {:?}", other),
    }

    // A reload starts the sequence over from the profile fetch.
    match loader.load().await {
        ViewState::Loaded { profile, .. } => assert_eq!(profile.username, "Blade"),
        other => panic!("expected Loaded, got {:?}", other),
    }

    assert_eq!(profile_stub.hits.load(Ordering::SeqCst), 2);
}

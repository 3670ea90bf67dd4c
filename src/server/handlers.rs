//! Request handlers for the profile site.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::warn;

use super::assets;
use super::templates::render_state;
use super::AppState;

/// Render the profile page. Runs the full load sequence per request.
pub async fn profile_page(State(state): State<AppState>) -> Response {
    let view = state.loader.load().await;
    let (status, html) = render_state(&view);
    (status, html).into_response()
}

/// Serve the raw profile document.
pub async fn profile_json(State(state): State<AppState>) -> Response {
    match state.loader.read_document().await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            warn!("profile document unavailable: {}", e);
            (StatusCode::NOT_FOUND, "profile document not found").into_response()
        }
    }
}

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}

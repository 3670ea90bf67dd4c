//! Web server for the profile page.
//!
//! Serves the rendered page at `/`, the raw profile document at
//! `/json/profile.json`, and the stylesheet at `/static/style.css`.

mod assets;
mod handlers;
mod routes;
pub mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::loader::ProfileLoader;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<ProfileLoader>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            loader: Arc::new(ProfileLoader::new(settings)),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! linkbio - self-hosted link-in-bio profile page.
//!
//! Loads a static JSON profile document, optionally enriches it with
//! best-effort video metadata, and renders a profile page with outbound
//! social links over HTTP or in the terminal.

pub mod cli;
pub mod config;
pub mod http_client;
pub mod links;
pub mod loader;
pub mod models;
pub mod server;
pub mod utils;

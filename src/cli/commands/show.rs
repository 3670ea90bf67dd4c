//! Terminal profile renderer.

use console::style;

use crate::config::Settings;
use crate::links::social_links;
use crate::loader::{ProfileLoader, ViewState};
use crate::utils::{format_count, format_date};

/// Run the load sequence once and print the profile to the terminal.
pub async fn cmd_show(settings: &Settings) -> anyhow::Result<()> {
    let loader = ProfileLoader::new(settings);

    match loader.load().await {
        ViewState::Loading => unreachable!("load() returns a terminal state"),
        ViewState::Failed { message } => {
            eprintln!("{} {}", style("✗").red(), message);
            anyhow::bail!("profile load failed")
        }
        ViewState::Loaded { profile, video } => {
            println!("{}", style(&profile.username).bold().cyan());
            println!(
                "{}",
                style(format!("{} • {}", profile.handle, profile.pronouns)).dim()
            );
            println!();
            println!("{}", profile.bio);

            if let Some(video) = video {
                println!();
                println!("{}", style("Latest video").bold());
                println!("  {}", video.title);
                println!(
                    "  {} views · {} likes · {} comments · published {}",
                    format_count(video.view_count),
                    format_count(video.like_count),
                    format_count(video.comment_count),
                    format_date(&video.published_at)
                );
            }

            let links = social_links(&profile.socials);
            if !links.is_empty() {
                println!();
                println!("{}", style("Links").bold());
                for link in links {
                    println!("  {:<10} {}", link.label, style(link.href).underlined());
                }
            }

            Ok(())
        }
    }
}

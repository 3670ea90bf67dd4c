//! Profile document validation command.

use console::style;

use crate::config::Settings;
use crate::links::Platform;
use crate::loader::ProfileLoader;

/// Validate the profile document and report configuration status.
pub async fn cmd_check(settings: &Settings) -> anyhow::Result<()> {
    let loader = ProfileLoader::new(settings);

    println!(
        "{} Checking profile document: {}",
        style("→").cyan(),
        settings.profile_path
    );

    let profile = match loader.fetch_profile().await {
        Ok(profile) => {
            println!("  {} Profile document is valid", style("✓").green());
            profile
        }
        Err(e) => {
            eprintln!("  {} {}", style("✗").red(), e);
            anyhow::bail!("profile document check failed")
        }
    };

    println!("{} Social links", style("→").cyan());
    for platform in Platform::ALL {
        let value = platform.value(&profile.socials);
        if value.is_empty() {
            println!("  {} {:<10} not configured", style("—").dim(), platform.label());
        } else {
            println!(
                "  {} {:<10} {}",
                style("✓").green(),
                platform.label(),
                platform.url(value)
            );
        }
    }

    if settings.video_api_url.is_empty() {
        println!("{} Video metadata: disabled", style("→").cyan());
    } else if profile.socials.youtube.is_empty() {
        println!(
            "{} Video metadata: no YouTube channel configured",
            style("→").cyan()
        );
    } else {
        match loader.fetch_video(&profile.socials.youtube).await {
            Ok(Some(video)) => {
                println!(
                    "{} Video metadata: {} ({})",
                    style("✓").green(),
                    video.title,
                    video.id
                );
            }
            Ok(None) => {
                println!("{} Video metadata: disabled", style("→").cyan());
            }
            Err(e) => {
                // Non-fatal by contract, but worth surfacing here.
                println!("{} Video metadata unavailable: {}", style("!").yellow(), e);
            }
        }
    }

    Ok(())
}

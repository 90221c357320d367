//! Inspection commands: normalize, key, platforms.

use crosspost::{Composer, CrosspostResult, JsonError, option_key, read_request};
use std::path::Path;

/// Handles the normalize command.
#[tracing::instrument(skip_all, fields(request = %request.display()))]
pub fn handle_normalize_command(composer: &Composer, request: &Path) -> CrosspostResult<()> {
    let mut publish_request = read_request(request)?;
    let rewritten = composer.normalizer().normalize(&mut publish_request);
    tracing::info!(rewritten, "Normalized request");

    let output = serde_json::to_string_pretty(&publish_request)
        .map_err(|e| JsonError::new(format!("Failed to serialize request: {}", e)))?;
    println!("{}", output);
    Ok(())
}

/// Handles the key command.
pub fn handle_key_command(platforms: &[String]) {
    for platform in platforms {
        println!("{}\t{}", platform, option_key(platform));
    }
}

/// Handles the platforms command.
pub fn handle_platforms_command(composer: &Composer) {
    for platform in composer.normalizer().registry().iter() {
        println!("{}", platform);
    }
}

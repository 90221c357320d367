//! Compose command handler.

use crosspost::{
    Composer, CrosspostResult, JsonError, prepare_publish, read_request, read_stored_post,
};
use std::path::Path;

/// Handles the compose command.
///
/// Prints the resolved requests as a JSON array.
#[tracing::instrument(skip_all, fields(request = %request.display()))]
pub fn handle_compose_command(
    composer: &Composer,
    request: &Path,
    stored: Option<&Path>,
    profile_key: &str,
    pretty: bool,
) -> CrosspostResult<()> {
    let mut publish_request = read_request(request)?;
    let stored_post = stored.map(read_stored_post).transpose()?;

    let resolved = prepare_publish(
        composer,
        &mut publish_request,
        stored_post.as_ref(),
        profile_key,
    )?;
    tracing::info!(count = resolved.len(), "Composed publish requests");

    let output = if pretty {
        serde_json::to_string_pretty(&resolved)
    } else {
        serde_json::to_string(&resolved)
    }
    .map_err(|e| JsonError::new(format!("Failed to serialize publish requests: {}", e)))?;
    println!("{}", output);
    Ok(())
}

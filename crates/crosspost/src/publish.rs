//! Caller-side entry points: parse, validate, compose.

use crosspost_compose::Composer;
use crosspost_core::{PublishRequest, ResolvedPublishRequest, StoredPost};
use crosspost_error::{
    CrosspostResult, IoError, JsonError, ValidationError, ValidationErrorKind,
};
use std::path::Path;
use tracing::{debug, instrument};

/// Parse a publish request from JSON text.
pub fn parse_request(json: &str) -> CrosspostResult<PublishRequest> {
    serde_json::from_str(json)
        .map_err(|e| JsonError::new(format!("Invalid publish request: {}", e)).into())
}

/// Parse a stored post from JSON text.
pub fn parse_stored_post(json: &str) -> CrosspostResult<StoredPost> {
    serde_json::from_str(json)
        .map_err(|e| JsonError::new(format!("Invalid stored post: {}", e)).into())
}

/// Read and parse a publish request file.
pub fn read_request(path: &Path) -> CrosspostResult<PublishRequest> {
    parse_request(&read_file(path)?)
}

/// Read and parse a stored post file.
pub fn read_stored_post(path: &Path) -> CrosspostResult<StoredPost> {
    parse_stored_post(&read_file(path)?)
}

fn read_file(path: &Path) -> CrosspostResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| IoError::new(format!("Failed to read {}: {}", path.display(), e)).into())
}

/// Check the publish preconditions, then compose.
///
/// The composer itself accepts anything; this is the validation a publish
/// endpoint performs before handing the request over.
///
/// # Errors
///
/// Returns error if the request lacks an account group or a target platform,
/// or if `profile_key` is blank.
#[instrument(skip_all)]
pub fn prepare_publish(
    composer: &Composer,
    request: &mut PublishRequest,
    stored: Option<&StoredPost>,
    profile_key: &str,
) -> CrosspostResult<Vec<ResolvedPublishRequest>> {
    request.validate()?;
    if profile_key.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyProfileKey).into());
    }
    debug!("Publish preconditions satisfied");
    Ok(composer.compose(request, stored, profile_key))
}

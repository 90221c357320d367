//! The incoming publish request.

use crate::nullable::{null_as_default, null_entries_as_default};
use crate::{MediaRef, OptionFields, Platform};
use crosspost_error::{ValidationError, ValidationErrorKind};
use derive_getters::Getters;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Per-platform override carried in [`PublishRequest::variants`].
///
/// Same shape as the base request: text, media and option fields.
#[derive(
    Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct VariantOverride {
    /// Replacement text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    /// Replacement media; `null` reads as none
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    media: Vec<MediaRef>,

    /// Option bags and aliases
    #[serde(flatten)]
    options: OptionFields,
}

impl VariantOverride {
    /// Mutable access to the option fields.
    pub fn options_mut(&mut self) -> &mut OptionFields {
        &mut self.options
    }
}

/// A single authoring intent, fanned out to one publish request per platform.
///
/// # Examples
///
/// ```
/// use crosspost_core::PublishRequest;
///
/// let request: PublishRequest = serde_json::from_str(r#"{
///     "accountGroupId": "group-1",
///     "content": "New moon tonight",
///     "platforms": ["x", "reddit"],
///     "reddit": {"subreddit": "astrology"}
/// }"#).unwrap();
///
/// assert_eq!(request.platforms().len(), 2);
/// assert!(request.options().contains("reddit"));
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), default)]
pub struct PublishRequest {
    /// Destination account group (opaque)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    account_group_id: Option<String>,

    /// Base text for every platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    /// Base media for every platform
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    media: Vec<MediaRef>,

    /// Explicitly requested platforms
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    platforms: Vec<Platform>,

    /// Time-of-post, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    schedule_date: Option<String>,

    /// Per-platform overrides; a `null` override reads as an empty one
    #[serde(
        default,
        deserialize_with = "null_entries_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    variants: IndexMap<Platform, VariantOverride>,

    /// Base option bags and aliases
    #[serde(flatten)]
    options: OptionFields,
}

impl PublishRequest {
    /// Mutable access to the top-level option fields.
    pub fn options_mut(&mut self) -> &mut OptionFields {
        &mut self.options
    }

    /// Mutable access to the variant overrides.
    pub fn variants_mut(&mut self) -> &mut IndexMap<Platform, VariantOverride> {
        &mut self.variants
    }

    /// Platforms to publish to: `platforms` first, then variant-only platforms.
    ///
    /// First-seen order is kept and repeated names collapse into one entry.
    pub fn target_platforms(&self) -> Vec<Platform> {
        let targets: IndexSet<&Platform> =
            self.platforms.iter().chain(self.variants.keys()).collect();
        targets.into_iter().cloned().collect()
    }

    /// Check the caller-side preconditions of a publish invocation.
    ///
    /// The composer does not enforce these; callers run this first.
    ///
    /// # Errors
    ///
    /// Returns error if `accountGroupId` is missing or blank, or if neither
    /// `platforms` nor `variants` names a platform.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let has_group = self
            .account_group_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty());
        if !has_group {
            return Err(ValidationError::new(
                ValidationErrorKind::MissingAccountGroup,
            ));
        }
        if self.platforms.is_empty() && self.variants.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::NoTargetPlatform));
        }
        Ok(())
    }
}

//! Previously persisted posts.

use crate::nullable::{null_as_default, null_entries_as_default};
use crate::{MediaRef, PersistedText, Platform};
use derive_getters::Getters;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Draft data saved for one platform of a stored post.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedVariant {
    /// Saved text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<PersistedText>,

    /// Saved media descriptors
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    media: Vec<MediaRef>,

    /// Option bags keyed by canonical key, usually serialized as a JSON string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform_options: Option<Value>,
}

impl PersistedVariant {
    /// Create a persisted variant.
    pub fn new(
        text: Option<PersistedText>,
        media: Vec<MediaRef>,
        platform_options: Option<Value>,
    ) -> Self {
        Self {
            text,
            media,
            platform_options,
        }
    }
}

/// A stored post: persisted variants keyed by platform, including `base`.
///
/// ```
/// use crosspost_core::{Platform, StoredPost};
///
/// let stored: StoredPost = serde_json::from_str(r#"{
///     "base": {"text": "Hello"},
///     "instagram": {"media": [{"type": "url-image", "url": "https://cdn.example/i.jpg"}]}
/// }"#).unwrap();
///
/// assert!(stored.variant(&Platform::from("instagram")).is_some());
/// assert!(stored.variant(&Platform::from("reddit")).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredPost(
    #[serde(deserialize_with = "null_entries_as_default")] IndexMap<Platform, PersistedVariant>,
);

impl StoredPost {
    /// Create an empty stored post.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the variant saved for `platform`.
    pub fn with_variant(mut self, platform: impl Into<Platform>, variant: PersistedVariant) -> Self {
        self.0.insert(platform.into(), variant);
        self
    }

    /// Variant saved for `platform`, if any.
    pub fn variant(&self, platform: &Platform) -> Option<&PersistedVariant> {
        self.0.get(platform)
    }

    /// Platforms with saved variants.
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.0.keys()
    }
}

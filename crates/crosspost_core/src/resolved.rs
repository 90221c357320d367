//! Fully resolved, per-platform publish requests.

use crate::Platform;
use derive_getters::Getters;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use typed_builder::TypedBuilder;

/// The single option bag selected for a platform, with its canonical key.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct OptionBag {
    /// Canonical key, e.g. `twitterOptions`
    key: String,
    /// Bag contents as supplied by the winning tier
    value: Value,
}

impl OptionBag {
    /// Create an option bag.
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Payload of one outbound publish call.
///
/// Serializes as `{ text, mediaUrls, <key>?, profileKey, scheduleDate? }`.
#[derive(Debug, Clone, PartialEq, Getters, TypedBuilder)]
pub struct PostData {
    /// Resolved text
    #[builder(setter(into))]
    text: String,
    /// Resolved media URLs
    #[builder(default)]
    media_urls: Vec<String>,
    /// Resolved option bag, if any tier supplied one
    #[builder(default)]
    options: Option<OptionBag>,
    /// Profile key attached unchanged
    #[builder(setter(into))]
    profile_key: String,
    /// Time-of-post passed through from the request
    #[builder(default)]
    schedule_date: Option<String>,
}

impl Serialize for PostData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut len = 3;
        if self.options.is_some() {
            len += 1;
        }
        if self.schedule_date.is_some() {
            len += 1;
        }
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("text", &self.text)?;
        map.serialize_entry("mediaUrls", &self.media_urls)?;
        if let Some(bag) = &self.options {
            map.serialize_entry(&bag.key, &bag.value)?;
        }
        map.serialize_entry("profileKey", &self.profile_key)?;
        if let Some(date) = &self.schedule_date {
            map.serialize_entry("scheduleDate", date)?;
        }
        map.end()
    }
}

/// One independently deliverable publish request.
///
/// Serializes as `{ platforms: [platform], postData }`.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPublishRequest {
    /// Targeted platform
    #[serde(rename = "platforms", serialize_with = "single_platform_list")]
    platform: Platform,
    /// Payload for that platform
    post_data: PostData,
}

impl ResolvedPublishRequest {
    /// Create a request targeting a single platform.
    pub fn new(platform: Platform, post_data: PostData) -> Self {
        Self {
            platform,
            post_data,
        }
    }
}

fn single_platform_list<S: Serializer>(
    platform: &Platform,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    [platform].serialize(serializer)
}

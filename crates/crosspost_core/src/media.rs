//! Media references accepted in requests and stored posts.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Structured media entry, e.g. `{"type": "url-image", "url": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Media kind discriminator (`url-image`, `url-video`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    /// Location of the media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl MediaDescriptor {
    /// Create a descriptor for the given kind and URL.
    pub fn new(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            url: Some(url.into()),
        }
    }
}

/// A media reference: either a bare URL or a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum MediaRef {
    /// Bare URL string
    Url(String),
    /// Structured descriptor
    Descriptor(MediaDescriptor),
}

impl MediaRef {
    /// The URL this reference points at, if it carries one.
    ///
    /// ```
    /// use crosspost_core::{MediaDescriptor, MediaRef};
    ///
    /// let bare = MediaRef::from("https://cdn.example/a.jpg".to_string());
    /// let described = MediaRef::from(MediaDescriptor::new("url-image", "https://cdn.example/b.jpg"));
    /// assert_eq!(bare.url(), Some("https://cdn.example/a.jpg"));
    /// assert_eq!(described.url(), Some("https://cdn.example/b.jpg"));
    /// ```
    pub fn url(&self) -> Option<&str> {
        match self {
            MediaRef::Url(url) => Some(url),
            MediaRef::Descriptor(descriptor) => descriptor.url.as_deref(),
        }
    }
}

/// Flatten media references into URL strings, skipping descriptors without a URL.
pub fn media_urls<'a>(media: impl IntoIterator<Item = &'a MediaRef>) -> Vec<String> {
    media
        .into_iter()
        .filter_map(MediaRef::url)
        .map(str::to_string)
        .collect()
}

//! Platform identifiers and the registry of known platform names.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Identifier of a publishing target (e.g. "instagram", "x").
///
/// Identifiers are open-ended: anything the caller names is a platform, and
/// unknown names are carried through the engine like any other.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct Platform(String);

impl Platform {
    /// Create a platform identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Platform {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<KnownPlatform> for Platform {
    fn from(known: KnownPlatform) -> Self {
        Self::new(known.as_ref())
    }
}

impl AsRef<str> for Platform {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Platforms shipped in the default registry.
///
/// `Base` is the distinguished entry stored posts use for the shared draft.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum KnownPlatform {
    /// Shared draft entry
    Base,
    /// Instagram
    Instagram,
    /// Reddit
    Reddit,
    /// Pinterest
    Pinterest,
    /// X (formerly Twitter)
    X,
    /// Bluesky
    Bluesky,
    /// Facebook
    Facebook,
    /// LinkedIn
    Linkedin,
    /// Threads
    Threads,
    /// TikTok
    Tiktok,
    /// YouTube
    Youtube,
}

/// The set of platform names the alias normalizer recognizes.
///
/// Supplied by the hosting application. The default holds every
/// [`KnownPlatform`]; deployments add names with [`PlatformRegistry::with_platform`].
///
/// # Examples
///
/// ```
/// use crosspost_core::PlatformRegistry;
///
/// let registry = PlatformRegistry::builtin().with_platform("mastodon");
/// assert!(registry.contains("reddit"));
/// assert!(registry.contains("mastodon"));
/// assert!(!registry.contains("myspace"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRegistry {
    platforms: IndexSet<Platform>,
}

impl PlatformRegistry {
    /// Registry without any platform.
    pub fn empty() -> Self {
        Self {
            platforms: IndexSet::new(),
        }
    }

    /// Registry holding every built-in platform.
    pub fn builtin() -> Self {
        Self {
            platforms: KnownPlatform::iter().map(Platform::from).collect(),
        }
    }

    /// Add a platform name, keeping registration order.
    pub fn with_platform(mut self, platform: impl Into<Platform>) -> Self {
        self.platforms.insert(platform.into());
        self
    }

    /// Add several platform names.
    pub fn with_platforms<I, P>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Platform>,
    {
        self.platforms.extend(platforms.into_iter().map(Into::into));
        self
    }

    /// Whether `name` is a registered platform.
    pub fn contains(&self, name: &str) -> bool {
        self.platforms.iter().any(|p| p.as_str() == name)
    }

    /// Registered platforms in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    /// Number of registered platforms.
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

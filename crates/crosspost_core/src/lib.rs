//! Core data types for the Crosspost publish composition engine.
//!
//! This crate models the three shapes the engine works with:
//! - [`PublishRequest`] - the caller's authoring intent, with per-platform
//!   [`VariantOverride`]s and free-form [`OptionFields`]
//! - [`StoredPost`] - previously persisted [`PersistedVariant`]s per platform
//! - [`ResolvedPublishRequest`] - one fully resolved request per platform
//!
//! Platform names are open-ended [`Platform`] identifiers; the
//! [`PlatformRegistry`] lists the names the hosting application knows about.

#![warn(missing_docs)]

mod media;
mod nullable;
mod options;
mod platform;
mod request;
mod resolved;
mod stored;
mod text;

pub use media::{MediaDescriptor, MediaRef, media_urls};
pub use options::OptionFields;
pub use platform::{KnownPlatform, Platform, PlatformRegistry};
pub use request::{
    PublishRequest, PublishRequestBuilder, PublishRequestBuilderError, VariantOverride,
    VariantOverrideBuilder, VariantOverrideBuilderError,
};
pub use resolved::{OptionBag, PostData, ResolvedPublishRequest};
pub use stored::{PersistedVariant, StoredPost};
pub use text::{PersistedText, WrappedText};

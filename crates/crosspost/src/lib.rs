//! Crosspost: one authoring intent, one publish request per platform.
//!
//! This crate re-exports the workspace API and adds what a hosting
//! application needs around the composition engine:
//! - [`CrosspostConfig`] - TOML configuration for the platform registry and
//!   option defaults
//! - [`prepare_publish`] - precondition checks followed by composition
//! - [`init_tracing`] - subscriber installation for binaries
//!
//! Delivering the resolved requests is left to the caller.

#![warn(missing_docs)]

mod config;
mod observability;
mod publish;

pub use config::{CrosspostConfig, DefaultsConfig};
pub use observability::{LogFormat, init_tracing};
pub use publish::{
    parse_request, parse_stored_post, prepare_publish, read_request, read_stored_post,
};

pub use crosspost_compose::{
    AliasNormalizer, CandidateProvider, Composer, PlatformContext, PublishDefaults,
    RawOptionsField, VariantResolver, compose, option_key,
};
pub use crosspost_core::{
    KnownPlatform, MediaDescriptor, MediaRef, OptionBag, OptionFields, PersistedText,
    PersistedVariant, Platform, PlatformRegistry, PostData, PublishRequest,
    ResolvedPublishRequest, StoredPost, VariantOverride,
};
pub use crosspost_error::{
    ConfigError, CrosspostError, CrosspostErrorKind, CrosspostResult, IoError, JsonError,
    ValidationError, ValidationErrorKind,
};

//! Publish request composition engine.
//!
//! Turns one [`PublishRequest`](crosspost_core::PublishRequest) into one
//! [`ResolvedPublishRequest`](crosspost_core::ResolvedPublishRequest) per
//! target platform.
//!
//! # Pipeline
//!
//! - [`AliasNormalizer`] - rewrites legacy bare-platform fields (`reddit`)
//!   into canonical option keys (`redditOptions`)
//! - [`option_key`] - platform name to option-bag field name
//! - [`VariantResolver`] - picks text, media and option bag per platform
//!   from the [`CandidateProvider`] tiers
//! - [`Composer`] - enumerates target platforms and emits the requests
//!
//! # Precedence
//!
//! Highest first: request variant, persisted variant, base request,
//! environment defaults ([`PublishDefaults`], option bags only). Each field
//! group is taken whole from the first tier that offers it.

#![warn(missing_docs)]

mod alias;
mod composer;
mod defaults;
mod option_key;
mod persisted;
mod resolver;
mod tiers;

pub use alias::{AliasNormalizer, RawOptionsField};
pub use composer::{Composer, compose};
pub use defaults::{PINTEREST_BOARD_ID_VAR, PINTEREST_BOARD_NAME_VAR, PublishDefaults};
pub use option_key::{OPTION_KEY_SUFFIX, option_key};
pub use persisted::decode_platform_options;
pub use resolver::VariantResolver;
pub use tiers::{
    BaseTier, CandidateProvider, EnvironmentTier, PersistedTier, PlatformContext, VariantTier,
    default_tiers,
};

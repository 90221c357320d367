//! Precedence tiers consulted when resolving a platform's fields.
//!
//! Each tier is a [`CandidateProvider`] that may offer a text, a media list
//! and an option bag for a platform. The resolver walks the tiers in order and
//! keeps the first offer per field group, so a platform's output never mixes
//! values from two tiers within one group.

use crate::{AliasNormalizer, PublishDefaults, decode_platform_options, option_key};
use crosspost_core::{
    OptionFields, PersistedVariant, Platform, PublishRequest, StoredPost, VariantOverride,
    media_urls,
};
use serde_json::Value;

/// Everything a tier may consult for one platform.
#[derive(Debug)]
pub struct PlatformContext<'a> {
    platform: &'a Platform,
    option_key: String,
    request: &'a PublishRequest,
    persisted: Option<&'a PersistedVariant>,
    persisted_options: Option<OptionFields>,
}

impl<'a> PlatformContext<'a> {
    /// Build the context for `platform`, decoding its persisted option bags.
    pub fn new(
        platform: &'a Platform,
        request: &'a PublishRequest,
        stored: Option<&'a StoredPost>,
        normalizer: &AliasNormalizer,
    ) -> Self {
        let persisted = stored.and_then(|post| post.variant(platform));
        let persisted_options =
            persisted.and_then(|variant| decode_platform_options(platform, variant, normalizer));
        Self {
            platform,
            option_key: option_key(platform.as_str()),
            request,
            persisted,
            persisted_options,
        }
    }

    /// Platform being resolved.
    pub fn platform(&self) -> &Platform {
        self.platform
    }

    /// Canonical option-bag key for the platform.
    pub fn option_key(&self) -> &str {
        &self.option_key
    }

    /// The normalized request.
    pub fn request(&self) -> &PublishRequest {
        self.request
    }

    /// The request's override for this platform.
    pub fn variant(&self) -> Option<&VariantOverride> {
        self.request.variants().get(self.platform)
    }

    /// The stored post's variant for this platform.
    pub fn persisted(&self) -> Option<&PersistedVariant> {
        self.persisted
    }

    /// Decoded persisted option bags; `None` when absent or malformed.
    pub fn persisted_options(&self) -> Option<&OptionFields> {
        self.persisted_options.as_ref()
    }
}

/// A source of candidate values for a platform.
///
/// Every method defaults to offering nothing; a tier implements only the
/// field groups it can supply.
pub trait CandidateProvider: std::fmt::Debug + Send + Sync {
    /// Short tier name used in logs.
    fn name(&self) -> &'static str;

    /// Candidate text. Empty strings must not be offered.
    fn text(&self, _ctx: &PlatformContext<'_>) -> Option<String> {
        None
    }

    /// Candidate media URLs. Empty lists must not be offered.
    fn media(&self, _ctx: &PlatformContext<'_>) -> Option<Vec<String>> {
        None
    }

    /// Candidate option bag for [`PlatformContext::option_key`].
    fn options(&self, _ctx: &PlatformContext<'_>) -> Option<Value> {
        None
    }
}

fn non_empty_text(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn non_empty_list(urls: Vec<String>) -> Option<Vec<String>> {
    (!urls.is_empty()).then_some(urls)
}

/// Overrides from `request.variants[platform]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantTier;

impl CandidateProvider for VariantTier {
    fn name(&self) -> &'static str {
        "variant"
    }

    fn text(&self, ctx: &PlatformContext<'_>) -> Option<String> {
        ctx.variant()?.content().as_deref().and_then(non_empty_text)
    }

    fn media(&self, ctx: &PlatformContext<'_>) -> Option<Vec<String>> {
        non_empty_list(media_urls(ctx.variant()?.media()))
    }

    fn options(&self, ctx: &PlatformContext<'_>) -> Option<Value> {
        ctx.variant()?.options().get(ctx.option_key()).cloned()
    }
}

/// Draft data saved with the stored post for this platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersistedTier;

impl CandidateProvider for PersistedTier {
    fn name(&self) -> &'static str {
        "persisted"
    }

    fn text(&self, ctx: &PlatformContext<'_>) -> Option<String> {
        let text = ctx.persisted()?.text().as_ref()?;
        non_empty_text(text.as_str())
    }

    fn media(&self, ctx: &PlatformContext<'_>) -> Option<Vec<String>> {
        non_empty_list(media_urls(ctx.persisted()?.media()))
    }

    fn options(&self, ctx: &PlatformContext<'_>) -> Option<Value> {
        ctx.persisted_options()?.get(ctx.option_key()).cloned()
    }
}

/// Base request fields shared by every platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseTier;

impl CandidateProvider for BaseTier {
    fn name(&self) -> &'static str {
        "base"
    }

    fn text(&self, ctx: &PlatformContext<'_>) -> Option<String> {
        ctx.request().content().as_deref().and_then(non_empty_text)
    }

    fn media(&self, ctx: &PlatformContext<'_>) -> Option<Vec<String>> {
        non_empty_list(media_urls(ctx.request().media()))
    }

    fn options(&self, ctx: &PlatformContext<'_>) -> Option<Value> {
        ctx.request().options().get(ctx.option_key()).cloned()
    }
}

/// Environment-configured option bags; lowest precedence.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentTier {
    defaults: PublishDefaults,
}

impl EnvironmentTier {
    /// Create the tier over `defaults`.
    pub fn new(defaults: PublishDefaults) -> Self {
        Self { defaults }
    }
}

impl CandidateProvider for EnvironmentTier {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn options(&self, ctx: &PlatformContext<'_>) -> Option<Value> {
        self.defaults.option_default(ctx.option_key())
    }
}

/// The default tier order: variant, persisted, base, environment.
pub fn default_tiers(defaults: PublishDefaults) -> Vec<Box<dyn CandidateProvider>> {
    vec![
        Box::new(VariantTier),
        Box::new(PersistedTier),
        Box::new(BaseTier),
        Box::new(EnvironmentTier::new(defaults)),
    ]
}

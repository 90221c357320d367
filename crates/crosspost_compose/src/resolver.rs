//! Per-platform resolution of text, media and option bag.

use crate::{CandidateProvider, PlatformContext, PublishDefaults, default_tiers};
use crosspost_core::OptionBag;
use tracing::debug;

/// Resolves a platform's field groups against an ordered list of tiers.
///
/// Text, media and option bag are resolved independently; within each group
/// the first tier with an offer wins outright.
#[derive(Debug)]
pub struct VariantResolver {
    tiers: Vec<Box<dyn CandidateProvider>>,
}

impl VariantResolver {
    /// Resolver over the default tiers with the given environment defaults.
    pub fn new(defaults: PublishDefaults) -> Self {
        Self::with_tiers(default_tiers(defaults))
    }

    /// Resolver over a custom tier order, highest precedence first.
    pub fn with_tiers(tiers: Vec<Box<dyn CandidateProvider>>) -> Self {
        Self { tiers }
    }

    /// Insert a tier at `position` (0 is highest precedence).
    ///
    /// Positions past the end append the tier as the new lowest precedence.
    pub fn insert_tier(&mut self, position: usize, tier: Box<dyn CandidateProvider>) {
        let position = position.min(self.tiers.len());
        self.tiers.insert(position, tier);
    }

    /// Tier names in precedence order.
    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    /// Text for the platform; empty when no tier has any.
    pub fn resolve_text(&self, ctx: &PlatformContext<'_>) -> String {
        self.first_candidate(ctx, "text", |tier| tier.text(ctx))
            .unwrap_or_default()
    }

    /// Media URLs for the platform; empty when no tier has any.
    pub fn resolve_media(&self, ctx: &PlatformContext<'_>) -> Vec<String> {
        self.first_candidate(ctx, "media", |tier| tier.media(ctx))
            .unwrap_or_default()
    }

    /// The single option bag for the platform, if any tier supplies one.
    pub fn resolve_options(&self, ctx: &PlatformContext<'_>) -> Option<OptionBag> {
        self.first_candidate(ctx, "options", |tier| tier.options(ctx))
            .map(|value| OptionBag::new(ctx.option_key(), value))
    }

    fn first_candidate<T, F>(
        &self,
        ctx: &PlatformContext<'_>,
        group: &'static str,
        offer: F,
    ) -> Option<T>
    where
        F: Fn(&dyn CandidateProvider) -> Option<T>,
    {
        for tier in &self.tiers {
            if let Some(value) = offer(tier.as_ref()) {
                debug!(
                    platform = %ctx.platform(),
                    group,
                    tier = tier.name(),
                    "Resolved field group"
                );
                return Some(value);
            }
        }
        debug!(platform = %ctx.platform(), group, "No tier supplied field group");
        None
    }
}

impl Default for VariantResolver {
    fn default() -> Self {
        Self::new(PublishDefaults::default())
    }
}

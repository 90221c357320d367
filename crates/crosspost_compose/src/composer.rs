//! Fan-out of one publish request into per-platform requests.

use crate::{
    AliasNormalizer, CandidateProvider, PlatformContext, PublishDefaults, VariantResolver,
};
use crosspost_core::{
    PlatformRegistry, PostData, PublishRequest, ResolvedPublishRequest, StoredPost,
};
use std::sync::OnceLock;
use tracing::{debug, info, instrument};

static DEFAULT_COMPOSER: OnceLock<Composer> = OnceLock::new();

/// Composes one [`ResolvedPublishRequest`] per target platform.
///
/// Holds only read-only configuration, so a single instance can serve
/// concurrent invocations.
///
/// # Examples
///
/// ```
/// use crosspost_compose::{Composer, PublishDefaults};
/// use crosspost_core::{PlatformRegistry, PublishRequest};
///
/// let composer = Composer::new(PlatformRegistry::builtin(), PublishDefaults::default());
/// let mut request: PublishRequest = serde_json::from_str(r#"{
///     "accountGroupId": "group-1",
///     "content": "Mercury goes direct",
///     "platforms": ["x"],
///     "variants": {"bluesky": {}}
/// }"#).unwrap();
///
/// let resolved = composer.compose(&mut request, None, "profile-key");
/// assert_eq!(resolved.len(), 2);
/// assert_eq!(resolved[1].platform().as_str(), "bluesky");
/// assert_eq!(resolved[1].post_data().text(), "Mercury goes direct");
/// ```
#[derive(Debug)]
pub struct Composer {
    normalizer: AliasNormalizer,
    resolver: VariantResolver,
}

impl Composer {
    /// Composer over `registry` with the default tier order.
    pub fn new(registry: PlatformRegistry, defaults: PublishDefaults) -> Self {
        Self {
            normalizer: AliasNormalizer::new(registry),
            resolver: VariantResolver::new(defaults),
        }
    }

    /// Composer over `registry` with a custom tier order.
    pub fn with_tiers(
        registry: PlatformRegistry,
        tiers: Vec<Box<dyn CandidateProvider>>,
    ) -> Self {
        Self {
            normalizer: AliasNormalizer::new(registry),
            resolver: VariantResolver::with_tiers(tiers),
        }
    }

    /// Composer over the built-in registry and the process-wide defaults.
    pub fn from_env() -> Self {
        Self::new(PlatformRegistry::builtin(), PublishDefaults::global().clone())
    }

    /// Process-wide composer built by [`Composer::from_env`] on first use.
    pub fn global() -> &'static Composer {
        DEFAULT_COMPOSER.get_or_init(Self::from_env)
    }

    /// Insert an extra precedence tier (0 is highest precedence).
    pub fn insert_tier(&mut self, position: usize, tier: Box<dyn CandidateProvider>) {
        self.resolver.insert_tier(position, tier);
    }

    /// The alias normalizer.
    pub fn normalizer(&self) -> &AliasNormalizer {
        &self.normalizer
    }

    /// The field resolver.
    pub fn resolver(&self) -> &VariantResolver {
        &self.resolver
    }

    /// Resolve `request` into one publish request per target platform.
    ///
    /// Normalizes `request` in place first. Targets are `platforms` followed
    /// by variant-only platforms, in first-seen order. `profile_key` is
    /// attached unchanged to every emitted request. Never fails: missing
    /// fields fall through to lower tiers and malformed persisted option data
    /// is treated as absent.
    #[instrument(skip_all, fields(has_stored = stored.is_some()))]
    pub fn compose(
        &self,
        request: &mut PublishRequest,
        stored: Option<&StoredPost>,
        profile_key: &str,
    ) -> Vec<ResolvedPublishRequest> {
        self.normalizer.normalize(request);
        let request: &PublishRequest = request;

        let targets = request.target_platforms();
        debug!(targets = targets.len(), "Computed target platforms");

        let resolved: Vec<ResolvedPublishRequest> = targets
            .into_iter()
            .map(|platform| {
                let ctx = PlatformContext::new(&platform, request, stored, &self.normalizer);
                let post_data = PostData::builder()
                    .text(self.resolver.resolve_text(&ctx))
                    .media_urls(self.resolver.resolve_media(&ctx))
                    .options(self.resolver.resolve_options(&ctx))
                    .profile_key(profile_key)
                    .schedule_date(request.schedule_date().clone())
                    .build();
                ResolvedPublishRequest::new(platform.clone(), post_data)
            })
            .collect();

        info!(requests = resolved.len(), "Composed publish requests");
        resolved
    }
}

/// Compose with the process-wide [`Composer`].
///
/// See [`Composer::compose`].
pub fn compose(
    request: &mut PublishRequest,
    stored: Option<&StoredPost>,
    profile_key: &str,
) -> Vec<ResolvedPublishRequest> {
    Composer::global().compose(request, stored, profile_key)
}

//! Migration of legacy bare-platform option fields to canonical keys.

use crate::option_key::{is_option_key, option_key};
use crosspost_core::{OptionFields, Platform, PlatformRegistry, PublishRequest};
use serde_json::Value;
use tracing::{debug, instrument};

/// A request field, classified by how it addresses an option bag.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOptionsField {
    /// Legacy bare field named after a platform, e.g. `reddit`
    Alias {
        /// Platform the field is named after
        platform: Platform,
        /// Option bag
        value: Value,
    },
    /// Field already under its canonical key, e.g. `redditOptions`
    Canonical {
        /// Canonical key
        key: String,
        /// Option bag
        value: Value,
    },
    /// Any other field; carried through untouched
    Passthrough {
        /// Field name
        name: String,
        /// Field value
        value: Value,
    },
}

impl RawOptionsField {
    /// Classify a field against the platform registry.
    ///
    /// ```
    /// use crosspost_compose::RawOptionsField;
    /// use crosspost_core::PlatformRegistry;
    /// use serde_json::json;
    ///
    /// let registry = PlatformRegistry::builtin();
    /// let field = RawOptionsField::classify("reddit".into(), json!({}), &registry);
    /// assert!(matches!(field, RawOptionsField::Alias { .. }));
    /// ```
    pub fn classify(name: String, value: Value, registry: &PlatformRegistry) -> Self {
        if registry.contains(&name) {
            RawOptionsField::Alias {
                platform: Platform::new(name),
                value,
            }
        } else if is_option_key(&name) {
            RawOptionsField::Canonical { key: name, value }
        } else {
            RawOptionsField::Passthrough { name, value }
        }
    }
}

/// Rewrites bare-platform aliases into `<platform>Options` keys.
///
/// Aliases are recognized for every registered platform, whether or not the
/// request targets it. When both forms are present the canonical value wins
/// and the alias is dropped, so the two are never populated together.
#[derive(Debug, Clone, Default)]
pub struct AliasNormalizer {
    registry: PlatformRegistry,
}

impl AliasNormalizer {
    /// Create a normalizer recognizing the platforms in `registry`.
    pub fn new(registry: PlatformRegistry) -> Self {
        Self { registry }
    }

    /// Registry used to recognize aliases.
    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// Normalize the top level and every variant of `request` in place.
    ///
    /// Idempotent. Returns the number of aliases removed.
    #[instrument(skip_all)]
    pub fn normalize(&self, request: &mut PublishRequest) -> usize {
        let mut removed = self.normalize_fields(request.options_mut());
        for (platform, variant) in request.variants_mut().iter_mut() {
            let count = self.normalize_fields(variant.options_mut());
            if count > 0 {
                debug!(%platform, aliases = count, "Normalized variant option aliases");
            }
            removed += count;
        }
        debug!(aliases = removed, "Alias normalization complete");
        removed
    }

    /// Normalize a single field set in place, keeping field order.
    ///
    /// Returns the number of aliases removed.
    pub fn normalize_fields(&self, fields: &mut OptionFields) -> usize {
        let has_alias = fields.keys().any(|name| self.registry.contains(name));
        if !has_alias {
            return 0;
        }

        let explicit: Vec<String> = fields
            .iter()
            .filter(|(name, value)| is_option_key(name) && !value.is_null())
            .map(|(name, _)| name.clone())
            .collect();

        let original = std::mem::take(fields);
        let mut removed = 0;
        for (name, value) in original {
            match RawOptionsField::classify(name, value, &self.registry) {
                RawOptionsField::Alias { platform, value } => {
                    removed += 1;
                    let key = option_key(platform.as_str());
                    if explicit.contains(&key) || fields.contains(&key) {
                        debug!(
                            %platform,
                            key = %key,
                            "Canonical option bag present, dropping alias"
                        );
                        continue;
                    }
                    debug!(%platform, key = %key, "Migrating option alias");
                    fields.insert(key, value);
                }
                RawOptionsField::Canonical { key, value } => {
                    if value.is_null() && fields.contains(&key) {
                        continue;
                    }
                    fields.insert(key, value);
                }
                RawOptionsField::Passthrough { name, value } => {
                    fields.insert(name, value);
                }
            }
        }
        removed
    }
}

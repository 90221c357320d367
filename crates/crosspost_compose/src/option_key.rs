//! Mapping from platform identifiers to option-bag field names.

/// Suffix appended to platform names without an irregular mapping.
pub const OPTION_KEY_SUFFIX: &str = "Options";

/// Platforms whose option-bag key is listed explicitly.
///
/// `x` keeps the key the distribution API used before the rename.
const IRREGULAR_OPTION_KEYS: &[(&str, &str)] = &[
    ("x", "twitterOptions"),
    ("reddit", "redditOptions"),
    ("pinterest", "pinterestOptions"),
];

/// Field name carrying `platform`'s structured options.
///
/// Total over all inputs: unlisted platforms get `<platform>Options`.
///
/// # Examples
///
/// ```
/// use crosspost_compose::option_key;
///
/// assert_eq!(option_key("x"), "twitterOptions");
/// assert_eq!(option_key("reddit"), "redditOptions");
/// assert_eq!(option_key("myspace"), "myspaceOptions");
/// ```
pub fn option_key(platform: &str) -> String {
    IRREGULAR_OPTION_KEYS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, key)| (*key).to_string())
        .unwrap_or_else(|| format!("{platform}{OPTION_KEY_SUFFIX}"))
}

/// Whether `field` is shaped like an option-bag key.
pub(crate) fn is_option_key(field: &str) -> bool {
    field.len() > OPTION_KEY_SUFFIX.len() && field.ends_with(OPTION_KEY_SUFFIX)
}

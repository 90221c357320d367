//! Decoding of option bags saved with persisted variants.

use crate::AliasNormalizer;
use crosspost_core::{OptionFields, PersistedVariant, Platform};
use serde_json::Value;
use tracing::warn;

/// Decode the option bags saved with `variant`.
///
/// Storage keeps them as a serialized JSON object string; an inline object is
/// accepted too. Anything unparseable is logged and treated as absent, so
/// resolution moves on to the next tier. Legacy aliases inside the blob are
/// normalized like request fields.
pub fn decode_platform_options(
    platform: &Platform,
    variant: &PersistedVariant,
    normalizer: &AliasNormalizer,
) -> Option<OptionFields> {
    let mut fields = match variant.platform_options().as_ref()? {
        Value::String(raw) if raw.trim().is_empty() => return None,
        Value::String(raw) => match serde_json::from_str::<OptionFields>(raw) {
            Ok(fields) => fields,
            Err(e) => {
                warn!(%platform, error = %e, "Ignoring malformed persisted platform options");
                return None;
            }
        },
        Value::Object(map) => OptionFields::from(map.clone()),
        Value::Null => return None,
        other => {
            warn!(
                %platform,
                kind = json_kind(other),
                "Ignoring persisted platform options of unexpected type"
            );
            return None;
        }
    };
    normalizer.normalize_fields(&mut fields);
    Some(fields)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Serde helpers that read an explicit JSON `null` as an empty value.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::hash::Hash;

/// `null` or a missing key becomes `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Map whose `null` entries read as `V::default()`; a `null` map is empty.
pub(crate) fn null_entries_as_default<'de, D, K, V>(
    deserializer: D,
) -> Result<IndexMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de> + Eq + Hash,
    V: Default + Deserialize<'de>,
{
    let entries = Option::<IndexMap<K, Option<V>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}

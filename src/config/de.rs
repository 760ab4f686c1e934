//! Lenient field decoding for billing documents.
//!
//! Hand-written bills put sort codes and account numbers in as bare numbers
//! and leave sections or list entries empty (`bank:`, `- ~`). These helpers
//! accept such values instead of rejecting the whole document.

use serde::de::{Deserialize, Deserializer};

/// Decodes any YAML scalar as its source text; `null` becomes the empty
/// string.
///
/// Plain scalars keep their exact spelling (`012345`, `1.50`, `0x1F`), so
/// numeric-looking account data passes through unchanged.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    null_as_default(deserializer)
}

/// Decodes `T`, treating an explicit `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a list whose entries may be `null`; a `null` entry becomes
/// `T::default()` and a `null` list becomes empty.
pub(crate) fn items_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

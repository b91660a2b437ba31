use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::constants::{ANONYMOUS, AUTHENTICATED_USERS, LEGACY_KEY_MAP, RELEASED_TO_KEY};
use crate::pipeline::parser::MetadataEntry;

static LEGACY_KEYS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LEGACY_KEY_MAP.iter().copied().collect());

/// An assessment entry after legacy keys and values have been rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedEntry<'a> {
    pub entry: MetadataEntry<'a>,
    /// The legacy spelling, when the key was rewritten to a different name
    pub renamed_from: Option<&'a str>,
    /// Whether the released-to value was replaced
    pub value_fixed: bool,
}

/// Map a legacy key spelling to its canonical assessment key.
/// Unknown keys pass through verbatim.
pub fn canonical_key(key: &str) -> &str {
    LEGACY_KEYS.get(key).copied().unwrap_or(key)
}

/// Replacement for a released-to value that still names "Authenticated Users"
/// (exports from 1.5 and earlier).
pub fn fixup_released_to(key: &str, value: &str) -> Option<&'static str> {
    if key == RELEASED_TO_KEY && value.contains(AUTHENTICATED_USERS) {
        Some(ANONYMOUS)
    } else {
        None
    }
}

/// Rewrite the key, then the value, of an entry bound for an assessment
pub fn normalize_entry(entry: MetadataEntry<'_>) -> NormalizedEntry<'_> {
    let key = canonical_key(entry.key);
    let renamed_from = (key != entry.key).then_some(entry.key);

    let mut value = entry.value;
    let mut value_fixed = false;
    if let Some(replacement) = value.and_then(|v| fixup_released_to(key, v)) {
        debug!(
            "Fixing obsolete reference to '{}', setting released to '{}'",
            AUTHENTICATED_USERS, replacement
        );
        value = Some(replacement);
        value_fixed = true;
    }

    NormalizedEntry {
        entry: MetadataEntry { key, value },
        renamed_from,
        value_fixed,
    }
}

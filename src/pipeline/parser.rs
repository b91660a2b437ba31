use crate::constants::METADATA_DELIMITER;

/// One parsed `KEY|VALUE` entry. Both parts are trimmed and borrow from the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataEntry<'a> {
    pub key: &'a str,
    /// `None` when the raw entry carried no second token
    pub value: Option<&'a str>,
}

impl MetadataEntry<'_> {
    /// Only entries with both key and value are forwarded to a record
    pub fn is_complete(&self) -> bool {
        self.value.is_some()
    }
}

/// Parse one raw `KEY|VALUE` entry.
///
/// Tokens are the non-empty runs between delimiters, so `"K||V"` reads as
/// `K`/`V` and `"|V"` as the key-only entry `V`. Tokens past the second are
/// discarded. Empty or whitespace-only entries yield `None`; a blank key
/// followed by a value (`" |VALUE"`) is kept with an empty key. This never
/// fails.
pub fn parse_entry(raw: &str) -> Option<MetadataEntry<'_>> {
    if raw.trim().is_empty() {
        return None;
    }

    let mut tokens = raw
        .split(METADATA_DELIMITER)
        .filter(|token| !token.is_empty());

    let key = tokens.next()?.trim();
    let value = tokens.next().map(str::trim);

    Some(MetadataEntry { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_key_and_value() {
        let entry = parse_entry(" TEXT_FORMAT | HTML ").unwrap();
        assert_eq!(entry.key, "TEXT_FORMAT");
        assert_eq!(entry.value, Some("HTML"));
        assert!(entry.is_complete());
    }

    #[test]
    fn test_parse_key_only() {
        let entry = parse_entry("ITEM_OBJECTIVE").unwrap();
        assert_eq!(entry.key, "ITEM_OBJECTIVE");
        assert_eq!(entry.value, None);
        assert!(!entry.is_complete());
    }

    #[test]
    fn test_parse_empty_and_blank_entries_yield_nothing() {
        assert_eq!(parse_entry(""), None);
        assert_eq!(parse_entry("   "), None);
        assert_eq!(parse_entry("|"), None);
        assert_eq!(parse_entry("||"), None);
    }

    #[test]
    fn test_parse_blank_key_with_value_is_kept() {
        let entry = parse_entry(" |VALUE").unwrap();
        assert_eq!(entry, MetadataEntry { key: "", value: Some("VALUE") });

        let entry = parse_entry("  |x").unwrap();
        assert_eq!(entry, MetadataEntry { key: "", value: Some("x") });

        // Both tokens blank but present
        let entry = parse_entry("  | ").unwrap();
        assert_eq!(entry, MetadataEntry { key: "", value: Some("") });
    }

    #[test]
    fn test_parse_discards_tokens_after_value() {
        let entry = parse_entry("A|B|C").unwrap();
        assert_eq!(entry.key, "A");
        assert_eq!(entry.value, Some("B"));
    }

    #[test]
    fn test_parse_collapses_consecutive_delimiters() {
        let entry = parse_entry("K||V").unwrap();
        assert_eq!(entry, MetadataEntry { key: "K", value: Some("V") });

        // A leading delimiter shifts the value into the key position
        let entry = parse_entry("|V").unwrap();
        assert_eq!(entry, MetadataEntry { key: "V", value: None });
    }

    #[test]
    fn test_parse_blank_value_is_still_a_value() {
        let entry = parse_entry("ITEM_OBJECTIVE| ").unwrap();
        assert_eq!(entry.key, "ITEM_OBJECTIVE");
        assert_eq!(entry.value, Some(""));
    }
}

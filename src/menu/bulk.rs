/// Characters that separate names in the bulk editor
const BULK_DELIMITERS: [char; 3] = [',', '，', '、'];

/// Split raw bulk-editor text into candidate names
///
/// Separators are any whitespace, ASCII comma, fullwidth comma and the
/// enumeration comma. Empty fragments are dropped; duplicates are kept for
/// [`MenuStore::bulk_replace`](super::MenuStore::bulk_replace) to resolve.
pub fn split_bulk_text(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || BULK_DELIMITERS.contains(&c))
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

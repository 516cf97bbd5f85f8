//! Text normalization helpers shared by the import parser and history types.

use serde::{Deserialize, Deserializer};

/// Byte order mark, left at the start of text saved by some Windows editors.
const BOM: char = '\u{feff}';

/// Unicode whitespace plus the byte order mark.
#[must_use]
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == BOM
}

/// Trims whitespace and byte order marks from both ends.
#[must_use]
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(is_blank_char)
}

/// Removes every whitespace character (and BOM), not only the leading and trailing ones.
///
/// 2FA secrets are often pasted in space-separated groups (`ABCD EFGH ...`).
#[must_use]
pub fn strip_all_whitespace(value: &str) -> String {
    value.chars().filter(|c| !is_blank_char(*c)).collect()
}

/// Deserializes `null` (or a missing field, with `#[serde(default)]`) as an empty string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes an opaque id given either as a JSON string or a number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
    })
}

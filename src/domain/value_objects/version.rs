//! Release version helpers

/// Major version used when a tag carries no digits at all
pub const DEFAULT_MAJOR: &str = "6";

/// Leading run of digits in `version`, starting at the first digit found.
///
/// `"6.5.0"` and `"v7.0.1"` give `"6"` and `"7"`. Returns `None` when the tag
/// contains no ASCII digit.
pub fn version_major(version: &str) -> Option<&str> {
    let start = version.find(|c: char| c.is_ascii_digit())?;
    let rest = &version[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Like [`version_major`] but falls back to `fallback`
pub fn version_major_or<'a>(version: &'a str, fallback: &'a str) -> &'a str {
    version_major(version).unwrap_or(fallback)
}

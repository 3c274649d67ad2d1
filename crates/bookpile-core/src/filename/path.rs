//! Filename extraction from URL path.

/// Extracts the last non-empty path segment from a URL for use as a
/// filename hint. Query string and fragment are never part of the result.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let last = parsed
        .path_segments()?
        .filter(|s| !s.is_empty())
        .last()?
        .to_string();
    match last.as_str() {
        "." | ".." => None,
        _ => Some(last),
    }
}

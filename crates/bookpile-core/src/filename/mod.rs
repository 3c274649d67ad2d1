//! Local filename derivation for downloaded books.
//!
//! Derives a safe filename from the manifest `id` or the URL path,
//! sanitized for Linux filesystems, always ending in `.txt` so the
//! merger can enumerate books by extension.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename_for_linux;

/// Default stem when neither the manifest id nor the URL path yields anything usable.
const DEFAULT_STEM: &str = "book";

/// Derives a safe `.txt` filename for saving a downloaded book.
///
/// Prefers the manifest `id` (if present and non-empty), otherwise the last
/// path segment of `url`. The result is sanitized for Linux (no `/`, NUL, or
/// control chars; no leading/trailing dots or spaces; reserved names like "."
/// or ".." replaced) and given a `.txt` extension if it lacks one.
///
/// # Examples
///
/// - `derive_filename("https://example.com/moby-dick.txt", None)` → `"moby-dick.txt"`
/// - `derive_filename("https://example.com/get?id=42", Some("bk_0042"))` → `"bk_0042.txt"`
pub fn derive_filename(url: &str, id: Option<&str>) -> String {
    let candidate = id
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| filename_from_url_path(url));

    let raw = match candidate {
        Some(c) => c,
        None => return format!("{DEFAULT_STEM}.txt"),
    };

    let sanitized = sanitize_filename_for_linux(&raw);
    let stem = if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_STEM.to_string()
    } else {
        sanitized
    };

    if stem.ends_with(".txt") {
        stem
    } else {
        format!("{stem}.txt")
    }
}

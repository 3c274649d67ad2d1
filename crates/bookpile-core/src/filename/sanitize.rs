//! Linux-safe filename sanitization.

/// Longest filename Linux accepts (NAME_MAX).
const NAME_MAX: usize = 255;

/// Sanitizes a candidate filename for safe use on Linux.
///
/// Path separators, whitespace, NUL, and control characters all become `_`,
/// runs of `_` collapse to one, leading/trailing dots, spaces, and
/// underscores are trimmed, and the result is capped at 255 bytes on a char
/// boundary.
pub fn sanitize_filename_for_linux(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.chars() {
        let mapped = if c == '/' || c == '\\' || c == '_' || c.is_whitespace() || c.is_control() {
            '_'
        } else {
            c
        };
        if mapped != '_' {
            out.push(mapped);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }

    let trimmed = out.trim_matches(|c: char| c == '.' || c == '_' || c.is_whitespace());

    let mut take = trimmed.len().min(NAME_MAX);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    trimmed[..take].to_string()
}

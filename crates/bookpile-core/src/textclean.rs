//! Cleaning pipeline for raw book text.
//!
//! Each pass is a function `&str -> String` applied in sequence. The final
//! result is a single logical line: no embedded newlines, words separated
//! by single spaces.

use std::sync::LazyLock;

use chardetng::EncodingDetector;
use regex::Regex;

/// Decode raw bytes leniently into a `String`.
///
/// A UTF-8 BOM is stripped; otherwise the charset is guessed with chardetng
/// and decoded with replacement characters, so decoding never fails.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes
        .strip_prefix(&[0xEF, 0xBB, 0xBF])
        .unwrap_or(bytes);

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Clean raw book bytes into one corpus line.
pub fn clean_book(bytes: &[u8]) -> String {
    let mut text = decode_text(bytes);
    text = normalize_line_endings(&text);
    text = dehyphenate_line_breaks(&text);
    text = flatten_whitespace(&text);
    text
}

/// Turn `\r\n` and bare `\r` into `\n`.
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Rejoin words split across a line break with a hyphen
/// (`encyclo-\npedia` becomes `encyclopedia`).
fn dehyphenate_line_breaks(text: &str) -> String {
    static HYPHEN_BREAK_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(\p{L})-\n[ \t]*(\p{L})").expect("valid regex"));

    HYPHEN_BREAK_RE.replace_all(text, "$1$2").to_string()
}

/// Collapse all whitespace runs (including newlines) to single spaces and
/// trim the ends. This is what enforces the one-line-per-book invariant.
fn flatten_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

//! Minimal content-quality check for downloaded books.
//!
//! A download that is mostly empty (an error page, a stub, a truncated
//! body) is worthless to the corpus; the fetcher trashes it instead of
//! letting it pollute the merge.

use crate::config::QualityConfig;

/// Size measurements of a downloaded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    /// Count of non-empty lines.
    pub lines: usize,
    /// Count of whitespace-separated words.
    pub words: usize,
}

/// Outcome of the quality check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Trash { reason: String },
}

/// Counts non-empty lines and whitespace-separated words.
pub fn measure(text: &str) -> ContentStats {
    let lines = text.lines().filter(|l| !l.trim().is_empty()).count();
    let words = text.split_whitespace().count();
    ContentStats { lines, words }
}

/// Applies the thresholds: a book must meet both minimums to be kept.
pub fn check(stats: ContentStats, thresholds: &QualityConfig) -> Verdict {
    if stats.lines < thresholds.min_lines {
        return Verdict::Trash {
            reason: format!(
                "{} non-empty lines, need {}",
                stats.lines, thresholds.min_lines
            ),
        };
    }
    if stats.words < thresholds.min_words {
        return Verdict::Trash {
            reason: format!("{} words, need {}", stats.words, thresholds.min_words),
        };
    }
    Verdict::Keep
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds(min_lines: usize, min_words: usize) -> QualityConfig {
        QualityConfig {
            min_lines,
            min_words,
        }
    }

    #[test]
    fn measure_counts_nonempty_lines_and_words() {
        let stats = measure("one two\n\n  \nthree four five\n");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.words, 5);
    }

    #[test]
    fn measure_empty_text() {
        let stats = measure("");
        assert_eq!(stats, ContentStats { lines: 0, words: 0 });
    }

    #[test]
    fn keeps_text_meeting_both_minimums() {
        let stats = ContentStats { lines: 10, words: 100 };
        assert_eq!(check(stats, &thresholds(10, 100)), Verdict::Keep);
    }

    #[test]
    fn trashes_too_few_lines() {
        let stats = ContentStats { lines: 3, words: 500 };
        assert!(matches!(
            check(stats, &thresholds(10, 100)),
            Verdict::Trash { .. }
        ));
    }

    #[test]
    fn trashes_too_few_words() {
        let stats = measure("hello world");
        assert!(matches!(
            check(stats, &thresholds(1, 100)),
            Verdict::Trash { .. }
        ));
    }
}

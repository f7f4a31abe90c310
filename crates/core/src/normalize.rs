//! Normalization of raw generated slide text.
//!
//! Strips markdown noise and section labels, then splits the text into the
//! requested number of slide segments and re-labels them with explicit
//! `Slide i:` markers.

use crate::markers::{label_segments, split_segments, strip_markers};
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Markdown emphasis, heading, quote and bullet glyphs.
static MARKDOWN_GLYPH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*#>\-]+").unwrap());

/// Section labels the model likes to add on its own.
static SECTION_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Bullet Points:|Visuals:|Content:|Points:)").unwrap()
});

/// Three or more newlines in a row.
static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalizer for generated slide content.
#[derive(Debug, Clone, Default)]
pub struct ContentNormalizer;

impl ContentNormalizer {
    /// Create a new content normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Clean raw generated text.
    ///
    /// - Normalizes line endings and Unicode composition (NFC)
    /// - Removes runs of `*`, `#`, `>` and `-`
    /// - Removes section labels ("Bullet Points:", "Visuals:", "Content:", "Points:")
    /// - Collapses 3+ newlines to a single blank line
    /// - Trims leading/trailing whitespace
    pub fn clean(&self, raw: &str) -> String {
        let text: String = raw.replace("\r\n", "\n").replace('\r', "\n").nfc().collect();

        let text = MARKDOWN_GLYPH_REGEX.replace_all(&text, "");
        let text = SECTION_LABEL_REGEX.replace_all(&text, "");
        let text = BLANK_RUN_REGEX.replace_all(&text, "\n\n");

        text.trim().to_string()
    }

    /// Split raw text into at most `target_count` slide segments.
    ///
    /// Marker-delimited segments are used as-is when there are exactly
    /// `target_count` of them. Otherwise the cleaned lines are cut into
    /// contiguous chunks of `max(1, lines / target_count)` lines and only the
    /// first `target_count` chunks are kept; trailing lines that spill into
    /// an extra chunk are dropped.
    pub fn normalize_segments(&self, raw: &str, target_count: usize) -> Vec<String> {
        let target = target_count.max(1);
        let cleaned = self.clean(raw);

        let segments = split_segments(&cleaned);
        if segments.len() == target {
            log::debug!("Found {} labeled slide segments", target);
            return segments.into_iter().map(String::from).collect();
        }

        log::warn!(
            "Expected {} slide segments but found {}; falling back to line chunking",
            target,
            segments.len()
        );

        chunk_lines(&cleaned, target)
    }

    /// Normalize raw text into labeled text with one `Slide i:` marker per segment.
    pub fn normalize(&self, raw: &str, target_count: usize) -> String {
        label_segments(&self.normalize_segments(raw, target_count))
    }
}

/// Cut the non-empty lines of `text` into at most `target` contiguous chunks.
///
/// Marker lines count toward the chunk size but their marker tokens are
/// stripped from the emitted chunk text. Chunks left empty are dropped.
fn chunk_lines(text: &str, target: usize) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let chunk_size = (lines.len() / target).max(1);

    lines
        .chunks(chunk_size)
        .take(target)
        .map(|chunk| {
            chunk
                .iter()
                .map(|line| strip_markers(line).trim().to_string())
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

//! Slide marker handling shared by the normalizer and the assembler.
//!
//! Generated text delimits slides with markers like `Slide 3:` or `Slide 3 -`.
//! Both stages split on the same pattern through this module.

use crate::SlideSpec;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a slide marker: "Slide", a number, and an optional `:` or `-`.
static SLIDE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Slide\s*\d+[:\-]?").unwrap());

/// Matches the title label and captures the rest of its line.
static TITLE_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Title:[ \t]*([^\r\n]*)").unwrap());

/// Label that introduces a slide title.
pub const TITLE_LABEL: &str = "Title:";

/// Split text on slide markers into trimmed, non-empty segments.
///
/// Text before the first marker counts as a segment of its own.
pub fn split_segments(text: &str) -> Vec<&str> {
    SLIDE_MARKER_REGEX
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Remove every slide marker from a piece of text.
pub fn strip_markers(text: &str) -> String {
    SLIDE_MARKER_REGEX.replace_all(text, "").into_owned()
}

/// Join segments back together, each preceded by an explicit `Slide i:` marker.
pub fn label_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| format!("Slide {}:\n{}", i + 1, seg.as_ref().trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Parse one segment into its title and trimmed body text.
///
/// Returns `None` when the segment has no `Title:` label. The title is the
/// text following the first label up to the end of its line, or
/// `fallback_title` when that is blank. The body is the segment with that
/// label and its line tail removed.
pub fn parse_segment(segment: &str, fallback_title: &str) -> Option<(String, String)> {
    let caps = TITLE_LINE_REGEX.captures(segment)?;
    let whole = caps.get(0)?;

    let title = caps
        .get(1)
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback_title.trim())
        .to_string();

    let mut body = String::with_capacity(segment.len());
    body.push_str(&segment[..whole.start()]);
    body.push_str(&segment[whole.end()..]);

    Some((title, body.trim().to_string()))
}

/// Parse labeled text into typed slides.
///
/// Segments without a title label, or whose body is empty once the title
/// line is removed, are dropped. Surviving slides are numbered from 1.
pub fn parse_slides(labeled: &str, fallback_title: &str) -> Vec<SlideSpec> {
    let mut slides = Vec::new();

    for segment in split_segments(labeled) {
        let Some((title, body)) = parse_segment(segment, fallback_title) else {
            log::debug!("Skipping segment without a title label");
            continue;
        };

        let body_lines: Vec<String> = body
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        if body_lines.is_empty() || title.is_empty() {
            log::warn!("Dropping slide '{}': no body text", title);
            continue;
        }

        slides.push(SlideSpec {
            title,
            body_lines,
            index: slides.len() + 1,
        });
    }

    slides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_segments_marker_variants() {
        let text = "Slide 1: one\nSlide2- two\nSlide 3 three\nSlide  10:ten";
        assert_eq!(split_segments(text), vec!["one", "two", "three", "ten"]);
    }

    #[test]
    fn test_split_segments_keeps_preamble() {
        let text = "Here are your slides\nSlide 1:\nA\nSlide 2:\nB";
        assert_eq!(split_segments(text), vec!["Here are your slides", "A", "B"]);
    }

    #[test]
    fn test_split_segments_requires_number() {
        // "Slides" without a number is ordinary text
        assert_eq!(
            split_segments("Slides are fun\nSlide show"),
            vec!["Slides are fun\nSlide show"]
        );
    }

    #[test]
    fn test_label_segments() {
        assert_eq!(
            label_segments(&["A", "B\nC"]),
            "Slide 1:\nA\n\nSlide 2:\nB\nC"
        );
        assert_eq!(label_segments::<&str>(&[]), "");
    }

    #[test]
    fn test_parse_segment_extracts_title_and_body() {
        let (title, body) = parse_segment("Title: Intro\nHello world", "Topic").unwrap();
        assert_eq!(title, "Intro");
        assert_eq!(body, "Hello world");
    }

    #[test]
    fn test_parse_segment_blank_title_uses_fallback() {
        let (title, body) = parse_segment("Title:\nHello", "Topic").unwrap();
        assert_eq!(title, "Topic");
        assert_eq!(body, "Hello");
    }

    #[test]
    fn test_parse_segment_without_label() {
        assert!(parse_segment("just text", "Topic").is_none());
    }

    #[test]
    fn test_parse_slides_drops_empty_bodies() {
        let labeled = "Slide 1:\nTitle: Only a title\n\nSlide 2:\nTitle: Real\nbody";
        let slides = parse_slides(labeled, "Topic");

        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "Real");
        assert_eq!(slides[0].body_lines, vec!["body"]);
        assert_eq!(slides[0].index, 1);
    }

    #[test]
    fn test_parse_slides_skips_unlabeled_segments() {
        let labeled = "Slide 1:\nno title here\n\nSlide 2:\nTitle: B\nline one\n\n  line two  ";
        let slides = parse_slides(labeled, "Topic");

        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].body_lines, vec!["line one", "line two"]);
    }
}

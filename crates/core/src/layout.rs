//! Slide geometry and typography.
//!
//! Positions are in EMU (914400 per inch), font sizes in points.

use crate::Frame;
use serde::{Deserialize, Serialize};

/// EMU per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// Slide width (10in, 4:3).
pub const SLIDE_WIDTH_EMU: i64 = 10 * EMU_PER_INCH;

/// Slide height (7.5in, 4:3).
pub const SLIDE_HEIGHT_EMU: i64 = 6_858_000;

/// Title size tiers: a title up to `max_chars` long gets `size_pt`.
pub const TITLE_SIZE_TIERS: &[TitleSizeTier] = &[
    TitleSizeTier {
        max_chars: 40,
        size_pt: 34,
    },
    TitleSizeTier {
        max_chars: 70,
        size_pt: 28,
    },
];

/// Title size when no tier matches.
pub const TITLE_FALLBACK_SIZE_PT: u32 = 24;

pub const BODY_FONT_SIZE_PT: u32 = 20;
pub const BODY_SPACE_AFTER_PT: u32 = 6;

/// Body lines longer than this are cut.
pub const MAX_LINE_CHARS: usize = 120;

/// Appended to a cut line.
pub const ELLIPSIS: &str = "...";

/// Prefix for each line in bullets mode.
pub const BULLET_PREFIX: &str = "• ";

/// Convert inches to EMU.
pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64).round() as i64
}

/// One step of the title size table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSizeTier {
    pub max_chars: usize,
    pub size_pt: u32,
}

/// All layout parameters used by the assembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckLayout {
    pub title_frame: Frame,
    pub body_frame: Frame,
    /// Checked in order; the first tier whose `max_chars` fits wins.
    pub title_tiers: Vec<TitleSizeTier>,
    pub title_fallback_pt: u32,
    pub body_font_pt: u32,
    pub body_space_after_pt: u32,
    pub max_line_chars: usize,
}

impl Default for DeckLayout {
    fn default() -> Self {
        Self {
            title_frame: Frame {
                x: inches(0.8),
                y: inches(0.7),
                cx: inches(8.5),
                cy: inches(1.3),
            },
            body_frame: Frame {
                x: inches(1.0),
                y: inches(2.0),
                cx: inches(8.5),
                cy: inches(4.5),
            },
            title_tiers: TITLE_SIZE_TIERS.to_vec(),
            title_fallback_pt: TITLE_FALLBACK_SIZE_PT,
            body_font_pt: BODY_FONT_SIZE_PT,
            body_space_after_pt: BODY_SPACE_AFTER_PT,
            max_line_chars: MAX_LINE_CHARS,
        }
    }
}

impl DeckLayout {
    /// Title font size for a title, by its length in characters.
    pub fn title_font_size(&self, title: &str) -> u32 {
        let len = title.chars().count();
        self.title_tiers
            .iter()
            .find(|tier| len <= tier.max_chars)
            .map(|tier| tier.size_pt)
            .unwrap_or(self.title_fallback_pt)
    }

    /// Cut a line to `max_line_chars` characters plus an ellipsis if it is longer.
    pub fn truncate_line(&self, line: &str) -> String {
        if line.chars().count() <= self.max_line_chars {
            return line.to_string();
        }
        let mut cut: String = line.chars().take(self.max_line_chars).collect();
        cut.push_str(ELLIPSIS);
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_of(len: usize) -> String {
        "x".repeat(len)
    }

    #[test]
    fn test_title_font_tiers() {
        let layout = DeckLayout::default();

        assert_eq!(layout.title_font_size(&title_of(39)), 34);
        assert_eq!(layout.title_font_size(&title_of(40)), 34);
        assert_eq!(layout.title_font_size(&title_of(41)), 28);
        assert_eq!(layout.title_font_size(&title_of(70)), 28);
        assert_eq!(layout.title_font_size(&title_of(71)), 24);
        assert_eq!(layout.title_font_size(""), 34);
    }

    #[test]
    fn test_title_length_counts_characters() {
        let layout = DeckLayout::default();

        // 40 multi-byte characters are still a short title
        assert_eq!(layout.title_font_size(&"é".repeat(40)), 34);
    }

    #[test]
    fn test_truncate_line() {
        let layout = DeckLayout::default();

        let short = "a".repeat(120);
        assert_eq!(layout.truncate_line(&short), short);

        let long = "b".repeat(130);
        let cut = layout.truncate_line(&long);
        assert_eq!(cut, format!("{}...", "b".repeat(120)));
        assert_eq!(cut.chars().count(), 123);
    }

    #[test]
    fn test_default_frames() {
        let layout = DeckLayout::default();

        assert_eq!(layout.title_frame.x, 731_520);
        assert_eq!(layout.title_frame.y, 640_080);
        assert_eq!(layout.body_frame.x, EMU_PER_INCH);
        assert_eq!(layout.body_frame.cy, 4_114_800);
    }
}

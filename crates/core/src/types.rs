//! Domain types for requests, parsed slides, and the rendered deck model.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default background color when the request leaves it blank.
pub const DEFAULT_COLOR_HEX: &str = "0072ff";

/// Item count used when the request does not specify one.
pub const DEFAULT_ITEM_COUNT: u32 = 4;

/// Largest number of bullets or paragraphs asked for per slide.
pub const MAX_ITEM_COUNT: u32 = 6;

/// Suffix appended to the sanitized topic to form the output file name.
pub const DECK_FILE_SUFFIX: &str = "_AI_Presentation.pptx";

/// How body text is laid out on each slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStyle {
    /// Prefixed list items.
    #[default]
    Bullets,
    /// Plain sentence blocks.
    Paragraphs,
}

impl FromStr for ContentStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bullets" | "bullet" => Ok(Self::Bullets),
            "paragraphs" | "paragraph" => Ok(Self::Paragraphs),
            other => Err(Error::InvalidRequest(format!(
                "unknown content style '{}' (expected 'bullets' or 'paragraphs')",
                other
            ))),
        }
    }
}

impl fmt::Display for ContentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullets => write!(f, "bullets"),
            Self::Paragraphs => write!(f, "paragraphs"),
        }
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidRequest(format!(
                "color '{}' is not a 6-digit hex value",
                hex
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| Error::InvalidRequest(format!("bad color '{}': {}", hex, e)))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Uppercase hex without `#`, as OOXML `srgbClr` expects.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::new(0x00, 0x72, 0xFF)
    }
}

/// One user submission: everything needed to generate a deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Subject of the presentation.
    pub topic: String,

    /// Number of slides to ask for.
    pub slide_count: usize,

    /// Bullets or paragraphs.
    pub content_style: ContentStyle,

    /// Bullets or paragraphs per slide, clamped to `1..=MAX_ITEM_COUNT`.
    pub item_count: u32,

    /// Slide background.
    pub background: RgbColor,

    /// Tone passed to the model ("professional" unless overridden).
    pub theme: String,
}

impl GenerationRequest {
    /// Build and validate a request.
    ///
    /// `item_count` falls back to [`DEFAULT_ITEM_COUNT`] when absent and is
    /// clamped to `1..=MAX_ITEM_COUNT`; `color_hex` falls back to
    /// [`DEFAULT_COLOR_HEX`] when absent or blank.
    pub fn new(
        topic: impl Into<String>,
        slide_count: usize,
        content_style: ContentStyle,
        item_count: Option<u32>,
        color_hex: Option<&str>,
    ) -> Result<Self> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(Error::InvalidRequest("topic must not be empty".into()));
        }
        if slide_count < 1 {
            return Err(Error::InvalidRequest(
                "slide count must be at least 1".into(),
            ));
        }

        let item_count = item_count
            .unwrap_or(DEFAULT_ITEM_COUNT)
            .clamp(1, MAX_ITEM_COUNT);

        let background = match color_hex.map(str::trim).filter(|s| !s.is_empty()) {
            Some(hex) => RgbColor::from_hex(hex)?,
            None => RgbColor::from_hex(DEFAULT_COLOR_HEX)?,
        };

        Ok(Self {
            topic,
            slide_count,
            content_style,
            item_count,
            background,
            theme: "professional".to_string(),
        })
    }

    /// Override the tone passed to the model.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// File name the deck is saved under.
    pub fn deck_filename(&self) -> String {
        deck_filename(&self.topic)
    }
}

/// Build the output file name from a topic.
///
/// Spaces become underscores; path separators are replaced as well so the
/// name can never point outside the output directory.
pub fn deck_filename(topic: &str) -> String {
    let stem: String = topic
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{}{}", stem, DECK_FILE_SUFFIX)
}

/// A slide parsed from labeled text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Non-empty after trimming.
    pub title: String,

    /// Trimmed, non-empty body lines in order.
    pub body_lines: Vec<String>,

    /// 1-based position among the slides that survived parsing.
    pub index: usize,
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Position and size of a shape, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// One paragraph of a text box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Full paragraph text, including any bullet prefix.
    pub text: String,
    pub font_size_pt: u32,
    pub bold: bool,
    pub color: RgbColor,
    pub alignment: Alignment,
    pub space_after_pt: Option<u32>,
}

/// A positioned text box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBox {
    pub frame: Frame,
    pub word_wrap: bool,
    pub paragraphs: Vec<Paragraph>,
}

/// A rendered slide: background plus title and body boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSlide {
    /// 1-based slide number.
    pub index: usize,
    pub background: RgbColor,
    pub title: TextBox,
    pub body: TextBox,
}

/// The output artifact: an ordered list of rendered slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Presentation title, stored in the document properties.
    pub title: String,
    pub slides: Vec<DeckSlide>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slides: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(
            RgbColor::from_hex("#0072ff").unwrap(),
            RgbColor::new(0x00, 0x72, 0xFF)
        );
        assert_eq!(
            RgbColor::from_hex("FF8800").unwrap(),
            RgbColor::new(0xFF, 0x88, 0x00)
        );
        assert!(RgbColor::from_hex("#12345").is_err());
        assert!(RgbColor::from_hex("zzzzzz").is_err());
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(RgbColor::new(0x00, 0x72, 0xFF).to_hex(), "0072FF");
        assert_eq!(RgbColor::WHITE.to_hex(), "FFFFFF");
    }

    #[test]
    fn test_content_style_from_str() {
        assert_eq!("bullets".parse::<ContentStyle>().unwrap(), ContentStyle::Bullets);
        assert_eq!(
            "Paragraphs".parse::<ContentStyle>().unwrap(),
            ContentStyle::Paragraphs
        );
        assert!("tables".parse::<ContentStyle>().is_err());
    }

    #[test]
    fn test_request_defaults_and_clamping() {
        let req = GenerationRequest::new("Rust", 3, ContentStyle::Bullets, None, None).unwrap();
        assert_eq!(req.item_count, DEFAULT_ITEM_COUNT);
        assert_eq!(req.background, RgbColor::default());
        assert_eq!(req.theme, "professional");

        let req =
            GenerationRequest::new("Rust", 3, ContentStyle::Bullets, Some(8), Some("")).unwrap();
        assert_eq!(req.item_count, 6);
        assert_eq!(req.background, RgbColor::default());

        let req = GenerationRequest::new("Rust", 3, ContentStyle::Bullets, Some(0), None).unwrap();
        assert_eq!(req.item_count, 1);
    }

    #[test]
    fn test_request_validation() {
        assert!(GenerationRequest::new("  ", 3, ContentStyle::Bullets, None, None).is_err());
        assert!(GenerationRequest::new("Rust", 0, ContentStyle::Bullets, None, None).is_err());
        assert!(
            GenerationRequest::new("Rust", 1, ContentStyle::Bullets, None, Some("blue")).is_err()
        );
    }

    #[test]
    fn test_deck_filename() {
        assert_eq!(
            deck_filename("Solar Energy Basics"),
            "Solar_Energy_Basics_AI_Presentation.pptx"
        );
        assert_eq!(deck_filename("a/b\\c"), "a_b_c_AI_Presentation.pptx");
    }
}

//! Deck assembly: turns labeled slide text into the rendered deck model.

use crate::layout::{DeckLayout, BULLET_PREFIX};
use crate::markers::parse_slides;
use crate::{
    Alignment, ContentStyle, Deck, DeckSlide, Paragraph, RgbColor, SlideSpec, TextBox,
};

/// Lays out parsed slides as title and body text boxes.
#[derive(Debug, Clone, Default)]
pub struct DeckAssembler {
    layout: DeckLayout,
}

impl DeckAssembler {
    /// Create an assembler with the default 4:3 layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom layout.
    pub fn with_layout(mut self, layout: DeckLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &DeckLayout {
        &self.layout
    }

    /// Assemble a deck from labeled text.
    ///
    /// Segments without a `Title:` label or without body text are skipped,
    /// so the returned deck may be empty.
    pub fn assemble(
        &self,
        labeled: &str,
        fallback_title: &str,
        background: RgbColor,
        style: ContentStyle,
    ) -> Deck {
        let specs = parse_slides(labeled, fallback_title);
        log::debug!("Assembling {} slides", specs.len());

        let mut deck = Deck::new(fallback_title.trim());
        deck.slides = specs
            .iter()
            .map(|spec| self.render_slide(spec, background, style))
            .collect();
        deck
    }

    /// Render one parsed slide.
    pub fn render_slide(
        &self,
        spec: &SlideSpec,
        background: RgbColor,
        style: ContentStyle,
    ) -> DeckSlide {
        let title = TextBox {
            frame: self.layout.title_frame,
            word_wrap: true,
            paragraphs: vec![Paragraph {
                text: spec.title.clone(),
                font_size_pt: self.layout.title_font_size(&spec.title),
                bold: true,
                color: RgbColor::WHITE,
                alignment: Alignment::Left,
                space_after_pt: None,
            }],
        };

        let paragraphs = spec
            .body_lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| {
                let line = self.layout.truncate_line(line);
                let text = match style {
                    ContentStyle::Bullets => format!("{}{}", BULLET_PREFIX, line),
                    ContentStyle::Paragraphs => line,
                };
                Paragraph {
                    text,
                    font_size_pt: self.layout.body_font_pt,
                    bold: false,
                    color: RgbColor::WHITE,
                    alignment: Alignment::Left,
                    space_after_pt: Some(self.layout.body_space_after_pt),
                }
            })
            .collect();

        DeckSlide {
            index: spec.index,
            background,
            title,
            body: TextBox {
                frame: self.layout.body_frame,
                word_wrap: true,
                paragraphs,
            },
        }
    }
}

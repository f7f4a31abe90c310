//! Core domain types, content normalization, and deck assembly for
//! AI-generated slide decks.

pub mod assemble;
pub mod error;
pub mod generate;
pub mod layout;
pub mod markers;
pub mod normalize;
pub mod prompt;
pub mod types;

pub use assemble::DeckAssembler;
pub use error::{Error, ErrorCategory, GenerationFailureKind, Result};
pub use generate::{StaticGenerator, TextGenerator};
pub use layout::DeckLayout;
pub use normalize::ContentNormalizer;
pub use prompt::build_prompt;
pub use types::{
    deck_filename, Alignment, ContentStyle, Deck, DeckSlide, Frame, GenerationRequest, Paragraph,
    RgbColor, SlideSpec, TextBox,
};

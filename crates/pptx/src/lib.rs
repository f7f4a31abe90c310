//! PPTX (Office Open XML) writer backend for generated slide decks.
//!
//! Writes .pptx files, which are ZIP archives containing XML documents.

pub mod parts;
pub mod writer;

pub use writer::PptxWriter;

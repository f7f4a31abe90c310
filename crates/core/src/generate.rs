//! The seam between deck building and the text generation provider.

use crate::Result;

/// Something that turns a prompt into generated text.
///
/// Implementations report failures as [`crate::Error::GenerationError`] with
/// the failure kind set where the failure is detected.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String>,
{
    fn generate(&self, prompt: &str) -> Result<String> {
        self(prompt)
    }
}

/// Generator that always returns the same text, for replaying stored output.
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    text: String,
}

impl StaticGenerator {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextGenerator for StaticGenerator {
    fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.text.clone())
    }
}

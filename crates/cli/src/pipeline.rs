//! End-to-end deck building: prompt, generate, normalize, assemble, write.

use deck_core::{
    build_prompt, ContentNormalizer, DeckAssembler, Error, GenerationRequest, Result,
    TextGenerator,
};
use deck_pptx::PptxWriter;
use std::path::{Path, PathBuf};

/// What a successful build produced.
#[derive(Debug)]
pub struct DeckOutcome {
    /// Where the deck was written.
    pub path: PathBuf,
    /// Number of slides in the written deck.
    pub slide_count: usize,
    /// Normalized, slide-labeled text the deck was assembled from.
    pub labeled: String,
}

/// Generate a deck for `request` and write it into `output_dir`.
///
/// Every failure is terminal: nothing is written unless at least one slide
/// survives assembly.
pub fn build_deck(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
    output_dir: &Path,
) -> Result<DeckOutcome> {
    let prompt = build_prompt(request);
    let raw = generator.generate(&prompt)?;
    log::debug!("Generated {} chars of slide text", raw.len());

    let labeled = ContentNormalizer::new().normalize(&raw, request.slide_count);
    let deck = DeckAssembler::new().assemble(
        &labeled,
        &request.topic,
        request.background,
        request.content_style,
    );

    if deck.is_empty() {
        return Err(Error::EmptyArtifact);
    }
    if deck.len() < request.slide_count {
        log::warn!(
            "Requested {} slides but only {} had a title and body",
            request.slide_count,
            deck.len()
        );
    }

    let path = output_dir.join(request.deck_filename());
    PptxWriter::new().save(&deck, &path)?;
    log::info!("Saved {} slides to {}", deck.len(), path.display());

    Ok(DeckOutcome {
        path,
        slide_count: deck.len(),
        labeled,
    })
}

//! Prompt construction for the text generation provider.

use crate::{ContentStyle, GenerationRequest};

/// Build the prompt asking the model for slide text.
///
/// The model is told to head every slide with `Slide N:` and a `Title:` line,
/// which is what the normalizer and assembler key on.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let body = match request.content_style {
        ContentStyle::Bullets => format!(
            "- Exactly {} short, natural bullet points (max 2 lines each)\n\
             Use clear, human-like wording. Keep bullets concise.",
            request.item_count
        ),
        ContentStyle::Paragraphs => format!(
            "- Exactly {} short paragraphs (max 3 lines each)\n\
             Do NOT use bullet points.\n\
             Keep text concise and clear.",
            request.item_count
        ),
    };

    format!(
        "Generate exactly {slides} PowerPoint slides about \"{topic}\".\n\
         Each slide must have a heading like \"Slide 1:\", \"Slide 2:\" etc.\n\
         Each slide should contain:\n\
         - Title: <title>\n\
         {body}\n\
         Style: {theme}.",
        slides = request.slide_count,
        topic = request.topic,
        body = body,
        theme = request.theme,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_prompt() {
        let request =
            GenerationRequest::new("Ocean Tides", 4, ContentStyle::Bullets, Some(3), None).unwrap();

        let prompt = build_prompt(&request);

        assert!(prompt.starts_with("Generate exactly 4 PowerPoint slides about \"Ocean Tides\"."));
        assert!(prompt.contains("Exactly 3 short, natural bullet points"));
        assert!(prompt.contains("- Title: <title>"));
        assert!(prompt.ends_with("Style: professional."));
        assert!(!prompt.contains("Do NOT use bullet points"));
    }

    #[test]
    fn test_paragraphs_prompt() {
        let request = GenerationRequest::new("Ocean Tides", 2, ContentStyle::Paragraphs, Some(9), None)
            .unwrap()
            .with_theme("playful");

        let prompt = build_prompt(&request);

        assert!(prompt.contains("Exactly 6 short paragraphs"));
        assert!(prompt.contains("Do NOT use bullet points."));
        assert!(prompt.ends_with("Style: playful."));
    }
}

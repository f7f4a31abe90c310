//! CLI tool for generating slide decks with a generative language model.

mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{ContentStyle, GenerationRequest, StaticGenerator};
use deck_gemini::{GeminiClient, GeminiConfig};
use pipeline::{build_deck, DeckOutcome};
use std::fs;
use std::path::PathBuf;

/// Generate a PowerPoint deck about a topic.
#[derive(Parser, Debug)]
#[command(name = "deck-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Presentation topic
    topic: String,

    /// Number of slides to generate
    #[arg(short, long, default_value = "5")]
    slides: usize,

    /// Content style: bullets or paragraphs
    #[arg(long, default_value = "bullets")]
    style: ContentStyle,

    /// Bullets or paragraphs per slide (1-6, default: 4)
    #[arg(short, long)]
    count: Option<u32>,

    /// Slide background color as hex
    #[arg(long, default_value = "#0072ff")]
    color: String,

    /// Tone requested from the model
    #[arg(short, long, default_value = "professional")]
    theme: String,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Build the deck from previously generated text instead of calling the API
    #[arg(long)]
    from_file: Option<PathBuf>,

    /// Print the normalized slide text to stdout
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    dotenv::dotenv().ok();

    if let Err(err) = run(&args) {
        match err.downcast_ref::<deck_core::Error>() {
            Some(deck_err) => {
                log::debug!("{:?}", deck_err);
                eprintln!("{}", deck_err.user_message());
            }
            None => eprintln!("Error: {:#}", err),
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let request = GenerationRequest::new(
        args.topic.as_str(),
        args.slides,
        args.style,
        args.count,
        Some(args.color.as_str()),
    )?
    .with_theme(args.theme.as_str());

    let output_dir = match &args.output {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.clone()
        }
        None => PathBuf::from("."),
    };

    if args.verbose {
        eprintln!(
            "Generating {} {} slides about \"{}\"",
            request.slide_count, request.content_style, request.topic
        );
    }

    let outcome = generate(args, &request, &output_dir)?;

    if args.print {
        println!("{}\n", outcome.labeled);
    }
    if args.verbose {
        eprintln!("  Wrote {} slides", outcome.slide_count);
    }
    println!("{}", outcome.path.display());

    Ok(())
}

/// Run the pipeline against stored text or the live API.
fn generate(
    args: &Args,
    request: &GenerationRequest,
    output_dir: &std::path::Path,
) -> Result<DeckOutcome> {
    let outcome = match &args.from_file {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            build_deck(&StaticGenerator::new(raw), request, output_dir)?
        }
        None => {
            let client = GeminiClient::new(GeminiConfig::from_env()?)?;
            if args.verbose {
                eprintln!("  Using model {}", client.config().model);
            }
            build_deck(&client, request, output_dir)?
        }
    };

    Ok(outcome)
}

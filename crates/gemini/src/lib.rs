//! Gemini text generation backend.
//!
//! Implements [`deck_core::TextGenerator`] on top of the `generateContent`
//! REST endpoint using a blocking HTTP client.

pub mod api;
pub mod client;
pub mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;

pub mod groq;
pub mod json;
pub mod prompt;
pub mod traits;

pub use groq::{GroqConfig, GroqExtractor};
pub use json::JsonExtractor;
pub use traits::FilterExtractor;

use serde_json::{Map, Value};
use thiserror::Error;

/// Message surfaced to the user whenever extraction fails
pub const EXTRACTION_FAILED: &str = "Failed to parse query. Please try again.";

/// Failures at the language-understanding boundary
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Response contained no message content")]
    EmptyResponse,

    #[error("Model output is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Model output is not a JSON object")]
    NotAnObject,

    #[error("Extractor not configured: {0}")]
    NotConfigured(String),
}

/// Rename the alternative spellings models use for the unit-type key
pub fn standardize_keys(filters: Map<String, Value>) -> Map<String, Value> {
    filters
        .into_iter()
        .map(|(key, value)| {
            let key = match key.to_lowercase().as_str() {
                "bhk" | "type" | "property type" => "property_type".to_string(),
                _ => key,
            };
            (key, value)
        })
        .collect()
}

use crate::nlu::GroqConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Which backend turns free text into filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractorKind {
    /// Hosted LLM via an OpenAI-compatible API
    Groq,
    /// Each query is already a JSON filter object
    Json,
}

/// Answer natural-language property queries over a listings catalog
#[derive(Debug, Clone, Parser)]
#[command(name = "property-finder", version)]
pub struct Config {
    /// Query to answer; reads one query per line from stdin when omitted
    pub query: Option<String>,

    /// Catalog file (JSON array of listings)
    #[arg(long, env = "PROPERTY_FINDER_CATALOG", default_value = "data/master_properties.json")]
    pub catalog: PathBuf,

    /// Filter extraction backend
    #[arg(long, value_enum, default_value_t = ExtractorKind::Groq)]
    pub extractor: ExtractorKind,

    /// API key for the extraction service
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat completions endpoint
    #[arg(long, env = "GROQ_API_URL", default_value = "https://api.groq.com/openai/v1/chat/completions")]
    pub api_url: String,

    /// Model used for extraction
    #[arg(long, env = "GROQ_MODEL", default_value = "llama-3.3-70b-versatile")]
    pub model: String,

    /// Request timeout for the extraction service
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Site that listing links are relative to
    #[arg(long, env = "PROPERTY_FINDER_SITE_URL", default_value = "https://nobrokerage.com")]
    pub site_url: String,

    /// Print replies as JSON
    #[arg(long)]
    pub json: bool,
}

impl Config {
    pub fn groq(&self) -> GroqConfig {
        GroqConfig {
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

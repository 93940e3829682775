use crate::catalog::Vocabulary;
use crate::models::Filters;
use crate::nlu::ExtractError;
use async_trait::async_trait;

/// Turns a free-text property query into a filter object.
/// Implementations may call out to a language model or parse the text directly.
#[async_trait]
pub trait FilterExtractor: Send + Sync {
    /// Extract filters, using `vocabulary` to tell locations from project names
    async fn extract(&self, query: &str, vocabulary: &Vocabulary) -> Result<Filters, ExtractError>;

    /// Get the name of the extraction backend
    fn source_name(&self) -> &'static str;
}

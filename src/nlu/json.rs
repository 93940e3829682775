use crate::catalog::Vocabulary;
use crate::models::Filters;
use crate::nlu::traits::FilterExtractor;
use crate::nlu::{standardize_keys, ExtractError};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Reads the query itself as a JSON filter object, for offline use
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExtractor;

impl JsonExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FilterExtractor for JsonExtractor {
    async fn extract(&self, query: &str, _vocabulary: &Vocabulary) -> Result<Filters, ExtractError> {
        let value: Value = serde_json::from_str(query)?;
        let Value::Object(map) = value else {
            return Err(ExtractError::NotAnObject);
        };
        let filters = Filters::from_value(&Value::Object(standardize_keys(map)));
        debug!(?filters, "Parsed filter object from query text");
        Ok(filters)
    }

    fn source_name(&self) -> &'static str {
        "json"
    }
}

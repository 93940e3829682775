//! One query in, one reply out.
//!
//! [`respond`] is the synchronous core: it takes an already-extracted filter
//! object and produces the reply. [`Assistant`] adds the extraction step in
//! front of it.

use crate::catalog::{Catalog, Vocabulary};
use crate::models::{Filters, Property};
use crate::nlu::{FilterExtractor, EXTRACTION_FAILED};
use crate::search::search;
use crate::summary::{summarize_found, summarize_not_found_in};
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of a single query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    /// Upstream failure, message shown verbatim
    Error { message: String },
    Found {
        summary: String,
        results: Vec<Property>,
    },
    NotFound { summary: String },
}

impl Reply {
    /// Text shown to the user
    pub fn message(&self) -> &str {
        match self {
            Reply::Error { message } => message,
            Reply::Found { summary, .. } | Reply::NotFound { summary } => summary,
        }
    }

    pub fn results(&self) -> &[Property] {
        match self {
            Reply::Found { results, .. } => results,
            _ => &[],
        }
    }
}

/// Search the catalog and summarize the outcome
pub fn respond(catalog: &Catalog, filters: &Filters) -> Reply {
    if let Some(message) = &filters.error {
        warn!("Upstream extraction failed: {}", message);
        return Reply::Error {
            message: message.clone(),
        };
    }

    let results = search(catalog, filters);
    info!("Query matched {} properties", results.len());

    if results.is_empty() {
        Reply::NotFound {
            summary: summarize_not_found_in(filters, &catalog.coverage()),
        }
    } else {
        Reply::Found {
            summary: summarize_found(&results, filters),
            results,
        }
    }
}

/// Catalog snapshot paired with a filter extractor
pub struct Assistant {
    catalog: Catalog,
    vocabulary: Vocabulary,
    extractor: Box<dyn FilterExtractor>,
}

impl Assistant {
    pub fn new(catalog: Catalog, extractor: Box<dyn FilterExtractor>) -> Self {
        let vocabulary = catalog.vocabulary();
        Self {
            catalog,
            vocabulary,
            extractor,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Extract filters from free text, falling back to an error filter
    pub async fn extract(&self, query: &str) -> Filters {
        match self.extractor.extract(query, &self.vocabulary).await {
            Ok(filters) => filters,
            Err(e) => {
                warn!("{} extraction failed: {}", self.extractor.source_name(), e);
                Filters::from_error(EXTRACTION_FAILED)
            }
        }
    }

    /// Answer one free-text query
    pub async fn ask(&self, query: &str) -> Reply {
        info!("Query: '{}'", query);
        let filters = self.extract(query).await;
        respond(&self.catalog, &filters)
    }
}

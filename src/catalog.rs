//! Read-only property catalog.
//!
//! The catalog is loaded once from a JSON array of listings and then lent to
//! the search engine per query. Records are cleaned on the way in: text
//! columns are trimmed and anything without a usable numeric price is dropped,
//! so downstream code can rely on every [`Property`] having a price.

use crate::models::Property;
use crate::summary::format_price;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Image shown when a listing has none of its own
pub const PLACEHOLDER_IMAGE: &str =
    "https://www.home-invest.be/wp-content/uploads/2022/10/placeholder-home-invest.jpeg";

/// Distinct lower-cased values the language-understanding step may refer to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub cities: BTreeSet<String>,
    pub localities: BTreeSet<String>,
    pub project_names: BTreeSet<String>,
    pub property_types: BTreeSet<String>,
}

/// Immutable snapshot of every searchable listing
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
    loaded_at: DateTime<Utc>,
}

/// Listing as it appears on disk, before cleaning
#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    locality: Option<String>,
    #[serde(default)]
    project_name: Option<String>,
    #[serde(default)]
    property_type: Option<String>,
    #[serde(default)]
    bhk: Option<String>,
    #[serde(default)]
    possession_status: Option<String>,
    #[serde(default)]
    price: Value,
    #[serde(default)]
    amenities: Option<String>,
    #[serde(default)]
    price_formatted: Option<String>,
    #[serde(default)]
    first_image: Option<String>,
    #[serde(default)]
    images_url: Value,
    #[serde(default)]
    cta_url: Option<String>,
}

impl Catalog {
    /// Build a snapshot from already-clean records
    pub fn from_properties(properties: Vec<Property>) -> Self {
        Self {
            properties,
            loaded_at: Utc::now(),
        }
    }

    /// Load and clean a JSON catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading property catalog from {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

        Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))
    }

    /// Parse and clean a JSON array of listings
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: Vec<RawListing> =
            serde_json::from_str(content).context("Catalog must be a JSON array of listings")?;
        let total = raw.len();

        let properties: Vec<Property> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(idx, listing)| {
                let property = listing.clean();
                if property.is_none() {
                    debug!("Dropping listing {} without a numeric price", idx);
                }
                property
            })
            .collect();

        let dropped = total - properties.len();
        if dropped > 0 {
            warn!("Dropped {} of {} listings without a usable price", dropped, total);
        }
        info!("✅ Catalog ready with {} properties", properties.len());

        Ok(Self::from_properties(properties))
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Known values for the filter extractor's prompt
    pub fn vocabulary(&self) -> Vocabulary {
        fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
            values
                .filter(|v| !v.is_empty())
                .map(str::to_lowercase)
                .collect()
        }

        Vocabulary {
            cities: distinct(self.properties.iter().map(|p| p.city.as_str())),
            localities: distinct(self.properties.iter().map(|p| p.locality.as_str())),
            project_names: distinct(self.properties.iter().map(|p| p.project_name.as_str())),
            property_types: distinct(self.properties.iter().map(|p| p.property_type.as_str())),
        }
    }

    /// Distinct cities in first-seen order
    pub fn coverage(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.properties
            .iter()
            .map(|p| p.city.as_str())
            .filter(|city| !city.is_empty() && seen.insert(city.to_lowercase()))
            .map(str::to_string)
            .collect()
    }
}

impl RawListing {
    fn clean(self) -> Option<Property> {
        let price = coerce_price(&self.price)?;

        let property_type = trimmed(self.property_type)
            .or_else(|| trimmed(self.bhk.clone()).map(|b| b.to_lowercase()))
            .unwrap_or_default();
        let project_name = trimmed(self.project_name).unwrap_or_default();
        let title = trimmed(self.title).unwrap_or_else(|| {
            let bhk = trimmed(self.bhk).unwrap_or_else(|| property_type.to_uppercase());
            format!("{} Apartment in {}", bhk, project_name)
        });
        let first_image = trimmed(self.first_image)
            .or_else(|| first_image_url(&self.images_url))
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        Some(Property {
            title,
            city: trimmed(self.city).unwrap_or_default(),
            locality: trimmed(self.locality).unwrap_or_default(),
            project_name,
            property_type,
            possession_status: trimmed(self.possession_status).unwrap_or_default(),
            price,
            amenities: trimmed(self.amenities).unwrap_or_default(),
            price_formatted: trimmed(self.price_formatted).unwrap_or_else(|| format_price(price)),
            first_image,
            cta_url: trimmed(self.cta_url).unwrap_or_default(),
        })
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn coerce_price(value: &Value) -> Option<i64> {
    let price = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.round() as i64))
        }
        _ => None,
    }?;
    (price >= 0).then_some(price)
}

/// First URL of an `images_url` column, stored either as a JSON array or as a
/// bracketed list literal such as `['"https://..."', '...']`
fn first_image_url(value: &Value) -> Option<String> {
    let first = match value {
        Value::Array(items) => items.first()?.as_str()?.to_string(),
        Value::String(s) => {
            let inner = s.trim().strip_prefix('[')?.strip_suffix(']')?;
            inner.split(',').next()?.to_string()
        }
        _ => return None,
    };
    let url = first
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .trim();
    (!url.is_empty()).then(|| url.to_string())
}

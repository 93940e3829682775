pub mod filters;

pub use filters::{Budget, Filters};

use serde::{Deserialize, Serialize};

/// Amenity values the catalog uses when a listing has nothing to offer
pub const NO_AMENITY_SENTINELS: [&str; 2] = ["No amenities listed", "Key amenities not specified"];

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub title: String,
    pub city: String,
    pub locality: String,
    pub project_name: String,
    pub property_type: String,
    pub possession_status: String,
    /// Whole rupees
    pub price: i64,
    pub amenities: String,
    pub price_formatted: String,
    pub first_image: String,
    pub cta_url: String,
}

impl Property {
    /// Amenity text usable for matching, or `None` when the listing carries a sentinel
    pub fn amenity_text(&self) -> Option<&str> {
        let text = self.amenities.trim();
        if text.is_empty()
            || NO_AMENITY_SENTINELS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(text))
        {
            None
        } else {
            Some(text)
        }
    }

    /// Individual amenity names
    pub fn amenity_list(&self) -> Vec<&str> {
        self.amenity_text()
            .map(|text| {
                text.split(',')
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Absolute link to the listing page, or `None` when the listing has no link
    pub fn listing_url(&self, site_url: &str) -> Option<String> {
        let path = self.cta_url.trim();
        if path.is_empty() {
            return None;
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }
        Some(format!(
            "{}/{}",
            site_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_amenities(amenities: &str) -> Property {
        Property {
            title: "2BHK Apartment in Skyline".to_string(),
            city: "Pune".to_string(),
            locality: "Baner".to_string(),
            project_name: "Skyline".to_string(),
            property_type: "2bhk".to_string(),
            possession_status: "READY_TO_MOVE".to_string(),
            price: 9_000_000,
            amenities: amenities.to_string(),
            price_formatted: "₹90.00 L".to_string(),
            first_image: String::new(),
            cta_url: "/project/skyline-baner-pune".to_string(),
        }
    }

    #[test]
    fn sentinel_amenities_are_treated_as_none() {
        assert_eq!(with_amenities("No amenities listed").amenity_text(), None);
        assert_eq!(with_amenities("key amenities not specified").amenity_text(), None);
        assert_eq!(with_amenities("  ").amenity_text(), None);
        assert!(with_amenities("No amenities listed").amenity_list().is_empty());
    }

    #[test]
    fn listing_url_joins_relative_path_to_site() {
        let property = with_amenities("Lift");
        assert_eq!(
            property.listing_url("https://nobrokerage.com").as_deref(),
            Some("https://nobrokerage.com/project/skyline-baner-pune")
        );
        assert_eq!(
            property.listing_url("https://nobrokerage.com/").as_deref(),
            Some("https://nobrokerage.com/project/skyline-baner-pune")
        );
    }

    #[test]
    fn listing_url_keeps_absolute_links_and_skips_missing_ones() {
        let mut property = with_amenities("Lift");
        property.cta_url = "https://example.com/p/1".to_string();
        assert_eq!(
            property.listing_url("https://nobrokerage.com").as_deref(),
            Some("https://example.com/p/1")
        );

        property.cta_url = String::new();
        assert_eq!(property.listing_url("https://nobrokerage.com"), None);
    }

    #[test]
    fn amenity_list_splits_on_commas() {
        let property = with_amenities("Swimming Pool, Gymnasium,Lift");
        assert_eq!(property.amenity_list(), vec!["Swimming Pool", "Gymnasium", "Lift"]);
    }
}

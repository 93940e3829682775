pub mod predicates;

use crate::catalog::Catalog;
use crate::models::{Filters, Property};
use tracing::debug;

/// Maximum number of listings returned for one query
pub const MAX_RESULTS: usize = 5;

/// Narrow the catalog to the listings matching every present filter field.
///
/// Results keep catalog order and are cut to [`MAX_RESULTS`]. Nothing is
/// scanned when the catalog is empty, the query was flagged as impossible or
/// the filter carries an upstream error.
pub fn search(catalog: &Catalog, filters: &Filters) -> Vec<Property> {
    find_properties(catalog.properties(), filters)
}

/// Same as [`search`] over a plain slice of listings
pub fn find_properties(properties: &[Property], filters: &Filters) -> Vec<Property> {
    if properties.is_empty() || filters.impossible_query || filters.error.is_some() {
        debug!("Skipping catalog scan");
        return Vec::new();
    }

    let predicates = predicates::compile(filters);
    debug!(
        "Scanning {} properties with {} predicates",
        properties.len(),
        predicates.len()
    );

    properties
        .iter()
        .filter(|&property| predicates.iter().all(|matches| matches(property)))
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Budget;
    use serde_json::json;

    fn property(city: &str, property_type: &str, price: i64) -> Property {
        Property {
            title: format!("{} in {}", property_type.to_uppercase(), city),
            city: city.to_string(),
            locality: "Baner".to_string(),
            project_name: "Skyline".to_string(),
            property_type: property_type.to_string(),
            possession_status: "READY_TO_MOVE".to_string(),
            price,
            amenities: "Gymnasium, Lift".to_string(),
            price_formatted: String::new(),
            first_image: String::new(),
            cta_url: String::new(),
        }
    }

    fn filters(value: serde_json::Value) -> Filters {
        Filters::from_value(&value)
    }

    #[test]
    fn matches_city_and_type_case_insensitively() {
        let catalog = Catalog::from_properties(vec![
            property("Pune", "2bhk", 9_000_000),
            property("Pune", "3bhk", 12_000_000),
        ]);

        let results = search(&catalog, &filters(json!({"city": "pune", "property_type": "2BHK"})));
        assert_eq!(results, vec![property("Pune", "2bhk", 9_000_000)]);
    }

    #[test]
    fn empty_filter_returns_first_five_in_order() {
        let properties: Vec<_> = (0..8).map(|i| property("Pune", "2bhk", i * 1_000_000)).collect();
        let results = find_properties(&properties, &Filters::default());
        assert_eq!(results, properties[..MAX_RESULTS].to_vec());
    }

    #[test]
    fn impossible_query_short_circuits() {
        let properties = vec![property("Pune", "2bhk", 9_000_000)];
        let results = find_properties(
            &properties,
            &filters(json!({"impossible_query": true, "city": "pune"})),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn upstream_error_skips_search() {
        let properties = vec![property("Pune", "2bhk", 9_000_000)];
        assert!(find_properties(&properties, &Filters::from_error("boom")).is_empty());
    }

    #[test]
    fn budget_range_applies_both_bounds() {
        let properties = vec![
            property("Pune", "2bhk", 4_000_000),
            property("Pune", "2bhk", 6_000_000),
            property("Pune", "2bhk", 11_000_000),
        ];
        let range = Filters {
            budget: Some(Budget {
                min: Some(5_000_000),
                max: Some(10_000_000),
            }),
            ..Filters::default()
        };
        let results = find_properties(&properties, &range);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].price, 6_000_000);
    }

    #[test]
    fn amenities_must_all_be_present() {
        let mut pool_only = property("Pune", "2bhk", 5_000_000);
        pool_only.amenities = "Swimming Pool, Lift".to_string();
        let mut both = property("Pune", "2bhk", 6_000_000);
        both.amenities = "Swimming Pool, Gymnasium".to_string();

        let results = find_properties(
            &[pool_only, both.clone()],
            &filters(json!({"amenities": ["gym", "pool"]})),
        );
        assert_eq!(results, vec![both]);
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        assert!(search(&Catalog::from_properties(Vec::new()), &Filters::default()).is_empty());
    }
}

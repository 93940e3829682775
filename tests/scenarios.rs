//! End-to-end query scenarios: catalog file on disk, filter object in,
//! reply out.

use pretty_assertions::assert_eq;
use property_finder::nlu::JsonExtractor;
use property_finder::{respond, Assistant, Catalog, Filters, Reply};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_catalog(listings: serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string_pretty(&listings).unwrap()).unwrap();
    file
}

fn pune_catalog() -> Catalog {
    let file = write_catalog(json!([
        {"title": "2BHK Apartment in Skyline", "city": "Pune", "locality": "Baner",
         "project_name": "Skyline", "property_type": "2bhk", "possession_status": "READY_TO_MOVE",
         "price": 9000000, "amenities": "Gymnasium, Lift"},
        {"title": "3BHK Apartment in Skyline", "city": "Pune", "locality": "Baner",
         "project_name": "Skyline", "property_type": "3bhk", "possession_status": "READY_TO_MOVE",
         "price": 12000000, "amenities": "Swimming Pool, Gymnasium"}
    ]));
    Catalog::load(file.path()).unwrap()
}

#[test]
fn two_bhk_in_pune() {
    let reply = respond(
        &pune_catalog(),
        &Filters::from_value(&json!({"city": "pune", "property_type": "2bhk"})),
    );

    assert_eq!(reply.results().len(), 1);
    assert_eq!(reply.results()[0].title, "2BHK Apartment in Skyline");
    assert!(reply.message().contains("Found **1**"));
    assert!(reply.message().contains("for your search"));
}

#[test]
fn nothing_in_pune_under_one_crore() {
    let catalog = Catalog::from_properties(
        pune_catalog()
            .properties()
            .iter()
            .filter(|p| p.price > 10_000_000)
            .cloned()
            .collect(),
    );
    let reply = respond(
        &catalog,
        &Filters::from_value(&json!({"city": "pune", "budget": {"max": 10000000}})),
    );

    assert_eq!(
        reply,
        Reply::NotFound {
            summary: "No options found under ₹1.00 Cr in Pune.".to_string()
        }
    );
}

#[test]
fn upstream_error_is_returned_unchanged() {
    let reply = respond(
        &pune_catalog(),
        &Filters::from_value(&json!({"error": "Failed to parse query."})),
    );

    assert!(reply.results().is_empty());
    assert_eq!(reply.message(), "Failed to parse query.");
}

#[test]
fn empty_filter_with_no_results_uses_fallback() {
    let reply = respond(&Catalog::from_properties(Vec::new()), &Filters::default());
    assert_eq!(reply.message(), property_finder::summary::FALLBACK);
}

#[test]
fn missing_catalog_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read catalog file"));
}

#[tokio::test]
async fn json_extractor_round_trip_through_assistant() {
    let assistant = Assistant::new(pune_catalog(), Box::new(JsonExtractor::new()));

    let found = assistant
        .ask(r#"{"city": "Pune", "amenities": ["gym"], "budget": {"min": 5000000}}"#)
        .await;
    assert_eq!(found.results().len(), 2);
    assert_eq!(
        found.message(),
        "Found **2** matching properties. Here are the listings over a budget of ₹0.5 Cr. \
         They range in price from ₹90.00 L to ₹1.20 Cr. Most are located in Baner."
    );

    let garbled = assistant.ask("2bhk near the station").await;
    assert_eq!(
        garbled,
        Reply::Error {
            message: property_finder::nlu::EXTRACTION_FAILED.to_string()
        }
    );
}

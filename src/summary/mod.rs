//! Natural-language summaries of a search outcome.
//!
//! Both summarizers are pure functions of the results and the filter object.
//! Prices use the Indian crore/lakh scale throughout.

mod found;
mod not_found;

pub use found::summarize_found;
pub use not_found::{summarize_not_found, summarize_not_found_in, DEFAULT_COVERAGE, FALLBACK};

/// One crore in rupees
pub const CRORE: i64 = 10_000_000;
/// One lakh in rupees
pub const LAKH: i64 = 100_000;

/// Render a price as `₹1.25 Cr` from one crore upwards, `₹90.00 L` below it
pub fn format_price(price: i64) -> String {
    if price >= CRORE {
        format!("₹{:.2} Cr", price as f64 / CRORE as f64)
    } else {
        format!("₹{:.2} L", price as f64 / LAKH as f64)
    }
}

/// Same as [`format_price`], with an empty string for a missing price
pub fn format_optional_price(price: Option<i64>) -> String {
    price.map(format_price).unwrap_or_default()
}

/// Upper-case the first letter of every word and lower-case the rest
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

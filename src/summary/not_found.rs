use super::{format_price, title_case};
use crate::models::Filters;

/// Reply when the filter object constrains nothing worth repeating back
pub const FALLBACK: &str =
    "I couldn't find any properties matching your exact criteria. You could try being less specific.";

/// Cities named in the invalid-location apology when the catalog is unknown
pub const DEFAULT_COVERAGE: [&str; 2] = ["Pune", "Mumbai"];

/// Explain an empty result, e.g. `No ready 3BHK options found under ₹1.20 Cr in Baner.`
pub fn summarize_not_found(filters: &Filters) -> String {
    summarize_not_found_in(filters, &DEFAULT_COVERAGE)
}

/// Same as [`summarize_not_found`], naming `coverage` as the cities on offer
pub fn summarize_not_found_in<S: AsRef<str>>(filters: &Filters, coverage: &[S]) -> String {
    if let Some(location) = &filters.invalid_location {
        return format!(
            "I'm sorry, I don't have property listings for {} at the moment. \
             My current database is focused on {}.",
            title_case(location),
            join_names(coverage)
        );
    }

    let mut leading = Vec::new();
    if let Some(status) = &filters.status {
        let status = status.replace('_', " ");
        let status = status.strip_suffix(" to move").unwrap_or(&status);
        leading.push(status.to_string());
    }
    if let Some(property_type) = &filters.property_type {
        leading.push(property_type.to_uppercase());
    }

    let mut trailing = Vec::new();
    if let Some(budget) = filters.budget {
        if let Some(max) = budget.max {
            trailing.push(format!("under {}", format_price(max)));
        }
        if let Some(min) = budget.min {
            trailing.push(format!("over {}", format_price(min)));
        }
    }
    if let Some(location) = filters.locality.as_ref().or(filters.city.as_ref()) {
        trailing.push(format!("in {}", title_case(location)));
    }

    if leading.is_empty() && trailing.is_empty() {
        return FALLBACK.to_string();
    }

    let mut parts = vec!["No".to_string()];
    parts.extend(leading);
    parts.push("options found".to_string());
    parts.extend(trailing);
    format!("{}.", parts.join(" "))
}

fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => "a limited set of cities".to_string(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(|name| name.as_ref()).collect();
            format!("{} and {}", init.join(", "), last.as_ref())
        }
    }
}

use super::{format_price, title_case, CRORE, FALLBACK};
use crate::models::{Filters, Property};

/// Summary for a non-empty result set
pub fn summarize_found(results: &[Property], filters: &Filters) -> String {
    if results.is_empty() {
        return FALLBACK.to_string();
    }

    let mut parts = vec![
        format!("Found **{}** matching properties.", results.len()),
        format!("Here are the listings {}.", budget_framing(filters)),
    ];

    if results.len() > 1 {
        let prices = results.iter().map(|p| p.price);
        if let (Some(low), Some(high)) = (prices.clone().min(), prices.max()) {
            parts.push(format!(
                "They range in price from {} to {}.",
                format_price(low),
                format_price(high)
            ));
        }
    }

    match top_localities(results).as_slice() {
        [first, second, ..] => parts.push(format!(
            "Most are located in {} and {}.",
            title_case(first),
            title_case(second)
        )),
        [only] => parts.push(format!("Most are located in {}.", title_case(only))),
        [] => {}
    }

    parts.join(" ")
}

fn budget_framing(filters: &Filters) -> String {
    let budget = filters.budget.unwrap_or_default();
    match (budget.max, budget.min) {
        (Some(max), _) => format!("within a budget of ₹{:.1} Cr", max as f64 / CRORE as f64),
        (None, Some(min)) => format!("over a budget of ₹{:.1} Cr", min as f64 / CRORE as f64),
        (None, None) => "for your search".to_string(),
    }
}

/// Up to two most frequent localities, ties broken by first appearance.
/// Spellings differing only in case count as one locality.
fn top_localities(results: &[Property]) -> Vec<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for locality in results.iter().map(|p| p.locality.as_str()).filter(|l| !l.is_empty()) {
        match counts
            .iter_mut()
            .find(|(seen, _)| seen.to_lowercase() == locality.to_lowercase())
        {
            Some((_, count)) => *count += 1,
            None => counts.push((locality, 1)),
        }
    }
    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(2).map(|(locality, _)| locality).collect()
}

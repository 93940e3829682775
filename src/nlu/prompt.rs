use crate::catalog::Vocabulary;
use std::collections::BTreeSet;

const INSTRUCTIONS: &str = r#"You extract search filters for a property search website. Reply with a single valid JSON object and nothing else.

RULES:
1. Only output JSON. No explanations, no markdown.
2. A project name is not a location. If the query mentions one of the valid project names, set "project_name" and do not set "city" or "locality" from it.
3. If the query mentions a city or locality that is not in the valid lists, return {"impossible_query": true, "invalid_location": "<the location>"}.
4. Budget phrases such as "under", "below", "less than" set "budget.max"; "over", "above", "more than" set "budget.min". Values are integers in rupees (1 Cr = 10000000, 1 L = 100000).
5. Amenities such as "gym", "pool" or "security" go into an "amenities" list.
6. "ready to move" or "ready" sets "status" to "ready_to_move".
7. Unit types such as "2BHK" go into "property_type" using the valid property type spelling."#;

const EXAMPLES: &str = r#"EXAMPLES:

Query: "Show me 2BHKs in Pune under 1 Cr with a gym"
JSON: {"city": "pune", "property_type": "2bhk", "budget": {"max": 10000000}, "amenities": ["gym"]}

Query: "Show me properties in the Pristine02 project"
JSON: {"project_name": "pristine02"}

Query: "Dehradun property"
JSON: {"impossible_query": true, "invalid_location": "dehradun"}"#;

/// Build the extraction prompt for one query
pub fn build_prompt(query: &str, vocabulary: &Vocabulary) -> String {
    format!(
        "{INSTRUCTIONS}\n\n\
         DATABASE VALUES:\n\
         - Valid cities: {}\n\
         - Valid localities: {}\n\
         - Valid property types: {}\n\
         - Valid project names: {}\n\n\
         {EXAMPLES}\n\n\
         Now process this query.\n\n\
         Query: \"{}\"\n\
         JSON:",
        list(&vocabulary.cities),
        list(&vocabulary.localities),
        list(&vocabulary.property_types),
        list(&vocabulary.project_names),
        query.replace('"', "'"),
    )
}

fn list(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Price bounds in whole rupees
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl Budget {
    fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let budget = Self {
            min: map.get("min").and_then(budget_bound),
            max: map.get("max").and_then(budget_bound),
        };
        if budget.min.is_none() && budget.max.is_none() {
            None
        } else {
            Some(budget)
        }
    }
}

/// Structured query produced by the language-understanding step.
///
/// Every field is optional. Deserialization never fails: unknown keys are
/// dropped and a key whose value has the wrong shape is treated as absent, so
/// the matching predicate is simply skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Value")]
pub struct Filters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub impossible_query: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Filters {
    /// Filter object carrying an upstream failure
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Lenient conversion from an arbitrary JSON value. Anything that is not an
    /// object yields the empty filter.
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(map) => Self::from_map(map),
            None => {
                debug!("Filter payload is not an object, treating as empty");
                Self::default()
            }
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            city: text(map, "city"),
            locality: text(map, "locality"),
            project_name: text(map, "project_name"),
            property_type: text(map, "property_type"),
            status: text(map, "status"),
            budget: map.get("budget").and_then(Budget::from_value),
            amenities: map
                .get("amenities")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .filter(|a| !a.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            impossible_query: matches!(map.get("impossible_query"), Some(Value::Bool(true))),
            invalid_location: text(map, "invalid_location"),
            error: text(map, "error"),
        }
    }

    /// True when no search constraint is present
    pub fn is_unconstrained(&self) -> bool {
        self.city.is_none()
            && self.locality.is_none()
            && self.project_name.is_none()
            && self.property_type.is_none()
            && self.status.is_none()
            && self.budget.is_none()
            && self.amenities.is_empty()
    }
}

impl From<Value> for Filters {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

fn text(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::String(_) | Value::Null => None,
        other => {
            debug!(key, value = %other, "Ignoring non-string filter value");
            None
        }
    }
}

fn whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite())
        .map(|f| f.round() as i64)
}

/// Budget bounds are rupee amounts, so negatives are treated as absent
fn budget_bound(value: &Value) -> Option<i64> {
    whole_number(value).filter(|n| *n >= 0)
}

use crate::models::{Budget, Filters, Property};

/// A single optional constraint taken from the filter object
pub type Predicate = Box<dyn Fn(&Property) -> bool + Send + Sync>;

/// Field of a listing compared by case-insensitive equality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    City,
    Locality,
    ProjectName,
    PropertyType,
    PossessionStatus,
}

impl TextField {
    pub fn get(self, property: &Property) -> &str {
        match self {
            TextField::City => &property.city,
            TextField::Locality => &property.locality,
            TextField::ProjectName => &property.project_name,
            TextField::PropertyType => &property.property_type,
            TextField::PossessionStatus => &property.possession_status,
        }
    }
}

pub fn text_equals(field: TextField, wanted: &str) -> Predicate {
    let wanted = wanted.to_lowercase();
    Box::new(move |property| field.get(property).to_lowercase() == wanted)
}

pub fn within_budget(budget: Budget) -> Predicate {
    Box::new(move |property| {
        budget.min.map_or(true, |min| property.price >= min)
            && budget.max.map_or(true, |max| property.price <= max)
    })
}

pub fn has_amenity(amenity: &str) -> Predicate {
    let needle = amenity.to_lowercase();
    Box::new(move |property| {
        property
            .amenity_text()
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

/// One predicate per present filter field. Each requested amenity gets its own
/// predicate, so a listing must mention all of them.
pub fn compile(filters: &Filters) -> Vec<Predicate> {
    let text_fields = [
        (TextField::City, &filters.city),
        (TextField::Locality, &filters.locality),
        (TextField::ProjectName, &filters.project_name),
        (TextField::PropertyType, &filters.property_type),
        (TextField::PossessionStatus, &filters.status),
    ];

    let mut predicates: Vec<Predicate> = text_fields
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| text_equals(field, v)))
        .collect();

    if let Some(budget) = filters.budget {
        predicates.push(within_budget(budget));
    }

    predicates.extend(filters.amenities.iter().map(|a| has_amenity(a)));

    predicates
}

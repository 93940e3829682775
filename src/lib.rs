pub mod assistant;
pub mod catalog;
pub mod config;
pub mod models;
pub mod nlu;
pub mod search;
pub mod summary;

pub use assistant::{respond, Assistant, Reply};
pub use catalog::{Catalog, Vocabulary};
pub use models::{Budget, Filters, Property};
pub use search::{find_properties, search, MAX_RESULTS};
pub use summary::{format_price, summarize_found, summarize_not_found};

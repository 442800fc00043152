mod bounding_box;
mod photo_page;
mod search_config;
mod search_error;
mod search_query;

pub use bounding_box::BoundingBox;
pub use photo_page::{PhotoRecord, SearchResponse};
pub use search_config::SearchConfig;
pub use search_error::SearchError;
pub use search_query::SearchQuery;

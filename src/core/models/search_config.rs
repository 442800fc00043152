use crate::global_constants;

/// Explicit configuration handed to the search client instead of ambient
/// globals. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_endpoint: String,
    pub api_key: String,
    pub bbox_half_width: f64,
    pub bbox_half_height: f64,
    pub max_result_pages: u32,
}

impl SearchConfig {
    pub fn with_api_key(api_key: String) -> Self {
        Self {
            api_key,
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_endpoint: global_constants::API_ENDPOINT.to_string(),
            api_key: String::new(),
            bbox_half_width: global_constants::BBOX_HALF_WIDTH,
            bbox_half_height: global_constants::BBOX_HALF_HEIGHT,
            max_result_pages: global_constants::MAX_RESULT_PAGES,
        }
    }
}

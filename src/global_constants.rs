pub const API_ENDPOINT: &str = "https://api.flickr.com/services/rest";

pub const PARAM_METHOD: &str = "method";
pub const PARAM_API_KEY: &str = "api_key";
pub const PARAM_FORMAT: &str = "format";
pub const PARAM_NO_JSON_CALLBACK: &str = "nojsoncallback";
pub const PARAM_SAFE_SEARCH: &str = "safe_search";
pub const PARAM_EXTRAS: &str = "extras";
pub const PARAM_TEXT: &str = "text";
pub const PARAM_BOUNDING_BOX: &str = "bbox";
pub const PARAM_PAGE: &str = "page";

pub const VALUE_SEARCH_METHOD: &str = "flickr.photos.search";
pub const VALUE_JSON_FORMAT: &str = "json";
pub const VALUE_DISABLE_JSON_CALLBACK: &str = "1";
pub const VALUE_USE_SAFE_SEARCH: &str = "1";
pub const VALUE_MEDIUM_URL_EXTRA: &str = "url_m";

pub const SEARCH_LAT_RANGE: (f64, f64) = (-90.0, 90.0);
pub const SEARCH_LON_RANGE: (f64, f64) = (-180.0, 180.0);
pub const BBOX_HALF_WIDTH: f64 = 1.0;
pub const BBOX_HALF_HEIGHT: f64 = 1.0;

// Later pages of very large result sets are sparse, so page selection is capped.
pub const MAX_RESULT_PAGES: u32 = 40;

pub const UNTITLED_PHOTO_TITLE: &str = "(Untitled)";

pub const STATUS_SEARCHING: &str = "Searching...";
pub const MESSAGE_PHRASE_EMPTY: &str = "Phrase Empty.";
pub const MESSAGE_INVALID_RANGE: &str = "Lat should be [-90, 90].\nLon should be [-180, 180].";
pub const MESSAGE_NO_IMAGE: &str = "No image found, try again";
pub const MESSAGE_NO_PHOTOS: &str = "No Photos Found. Search Again.";

pub const RESULT_IMAGE_FILE_NAME: &str = "photo_roulette_result.jpg";

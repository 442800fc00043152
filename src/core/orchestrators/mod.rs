mod photo_search_client;

pub use photo_search_client::PhotoSearchClient;

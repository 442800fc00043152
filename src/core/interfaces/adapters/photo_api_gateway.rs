use anyhow::Result;
use async_trait::async_trait;

/// HTTP side of the photo API: a GET against the configured search endpoint
/// with query parameters, and a plain byte download for a resolved image URL.
#[async_trait]
pub trait PhotoApiGateway: Send + Sync {
    async fn search_photos(&self, parameters: &[(String, String)]) -> Result<String>;

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::PhotoApiGateway;

pub struct ReqwestPhotoGateway {
    client: reqwest::Client,
    api_endpoint: String,
}

impl ReqwestPhotoGateway {
    pub fn new(api_endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_endpoint,
        }
    }
}

#[async_trait]
impl PhotoApiGateway for ReqwestPhotoGateway {
    async fn search_photos(&self, parameters: &[(String, String)]) -> Result<String> {
        log::info!("[GATEWAY] GET {}", self.api_endpoint);

        let response = self
            .client
            .get(&self.api_endpoint)
            .query(parameters)
            .send()
            .await
            .context("search request failed")?
            .error_for_status()
            .context("search request rejected")?;

        let body = response
            .text()
            .await
            .context("failed to read search response body")?;
        log::debug!("[GATEWAY] response body: {}", body);

        Ok(body)
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        log::info!("[GATEWAY] downloading image");
        log::debug!("[GATEWAY] image URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("image request failed")?
            .error_for_status()
            .context("image request rejected")?;

        let bytes = response
            .bytes()
            .await
            .context("failed to read image bytes")?;
        log::debug!("[GATEWAY] downloaded {} bytes", bytes.len());

        Ok(bytes.to_vec())
    }
}

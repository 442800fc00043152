use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::Rng;

use crate::core::interfaces::adapters::{DisplaySink, PhotoApiGateway};
use crate::core::models::{BoundingBox, SearchConfig, SearchError, SearchQuery, SearchResponse};
use crate::global_constants;

/// Runs one search end to end: validate the input, discover the page count,
/// fetch one random page, pick one random record, download its image, and
/// hand the result to the display sink.
///
/// Every user-initiated search claims a fresh generation id. Staleness is
/// checked before the content request, before the image download, and before
/// any sink delivery, so the newest search always wins and a superseded one
/// drops silently.
pub struct PhotoSearchClient {
    gateway: Arc<dyn PhotoApiGateway>,
    display: Arc<dyn DisplaySink>,
    config: SearchConfig,
    latest_generation: AtomicU64,
}

impl PhotoSearchClient {
    pub fn new(
        gateway: Arc<dyn PhotoApiGateway>,
        display: Arc<dyn DisplaySink>,
        config: SearchConfig,
    ) -> Self {
        Self {
            gateway,
            display,
            config,
            latest_generation: AtomicU64::new(0),
        }
    }

    pub async fn search_by_phrase(&self, text: &str) -> Result<(), SearchError> {
        self.run_search(SearchQuery::by_phrase(text)).await
    }

    pub async fn search_by_location(
        &self,
        latitude_text: &str,
        longitude_text: &str,
    ) -> Result<(), SearchError> {
        self.run_search(SearchQuery::by_location(latitude_text, longitude_text))
            .await
    }

    /// Abandons any in-flight search at its next checkpoint. Its network
    /// calls may still complete, but nothing it produces reaches the sink.
    #[allow(dead_code)]
    pub fn cancel_active_search(&self) {
        self.latest_generation.fetch_add(1, Ordering::SeqCst);
        log::debug!("[SEARCH] active search cancelled");
    }

    async fn run_search(&self, query: Result<SearchQuery, SearchError>) -> Result<(), SearchError> {
        // A new user action supersedes whatever is in flight, valid or not.
        let generation = self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;

        match self.execute(generation, query).await {
            Ok(()) => Ok(()),
            Err(error) => {
                if self.is_current(generation) {
                    log::warn!("[SEARCH] search failed: {}", error);
                    self.display.display_status(error.user_message()).await;
                } else {
                    log::debug!("[SEARCH] dropping error from superseded search: {}", error);
                }
                Err(error)
            }
        }
    }

    async fn execute(
        &self,
        generation: u64,
        query: Result<SearchQuery, SearchError>,
    ) -> Result<(), SearchError> {
        let query = query?;
        self.display
            .display_status(global_constants::STATUS_SEARCHING)
            .await;

        let parameters = self.build_method_parameters(&query);

        log::info!("[SEARCH] issuing discovery request");
        let body = self
            .gateway
            .search_photos(&parameters)
            .await
            .map_err(|error| SearchError::Transport(error.to_string()))?;
        let total_pages = SearchResponse::parse(&body)?.page_count()?;
        let page = pick_random_page(total_pages, self.config.max_result_pages);
        log::debug!(
            "[SEARCH] {} pages reported, fetching page {}",
            total_pages,
            page
        );

        if !self.is_current(generation) {
            log::debug!("[SEARCH] superseded before content request, stopping");
            return Ok(());
        }

        let mut content_parameters = parameters.clone();
        content_parameters.push((global_constants::PARAM_PAGE.to_string(), page.to_string()));

        log::info!("[SEARCH] issuing content request for page {}", page);
        let body = self
            .gateway
            .search_photos(&content_parameters)
            .await
            .map_err(|error| SearchError::Transport(error.to_string()))?;
        let response = SearchResponse::parse(&body)?;
        let photos = response.photos()?;
        if photos.is_empty() {
            return Err(SearchError::NoResults);
        }

        let record = &photos[pick_random_index(photos.len())];
        let image_url = record.image_url()?;
        let title = record.display_title()?;

        if !self.is_current(generation) {
            log::debug!("[SEARCH] superseded before image download, stopping");
            return Ok(());
        }

        log::info!("[SEARCH] downloading selected image");
        log::debug!("[SEARCH] image URL: {}", image_url);
        let image = self
            .gateway
            .fetch_image(image_url)
            .await
            .map_err(|error| SearchError::ImageFetch(error.to_string()))?;

        if !self.is_current(generation) {
            log::debug!("[SEARCH] superseded after image download, dropping result");
            return Ok(());
        }

        if let Err(error) = self.display.display_photo(&image, title).await {
            log::error!("[DISPLAY] failed to deliver photo: {:#}", error);
        } else {
            log::info!("[SEARCH] displayed \"{}\"", title);
        }
        Ok(())
    }

    fn is_current(&self, generation: u64) -> bool {
        self.latest_generation.load(Ordering::SeqCst) == generation
    }

    fn build_method_parameters(&self, query: &SearchQuery) -> Vec<(String, String)> {
        let mut parameters: Vec<(String, String)> = vec![
            (
                global_constants::PARAM_METHOD.to_string(),
                global_constants::VALUE_SEARCH_METHOD.to_string(),
            ),
            (
                global_constants::PARAM_API_KEY.to_string(),
                self.config.api_key.clone(),
            ),
            (
                global_constants::PARAM_SAFE_SEARCH.to_string(),
                global_constants::VALUE_USE_SAFE_SEARCH.to_string(),
            ),
            (
                global_constants::PARAM_EXTRAS.to_string(),
                global_constants::VALUE_MEDIUM_URL_EXTRA.to_string(),
            ),
            (
                global_constants::PARAM_FORMAT.to_string(),
                global_constants::VALUE_JSON_FORMAT.to_string(),
            ),
            (
                global_constants::PARAM_NO_JSON_CALLBACK.to_string(),
                global_constants::VALUE_DISABLE_JSON_CALLBACK.to_string(),
            ),
        ];

        match query {
            SearchQuery::ByPhrase(text) => {
                parameters.push((global_constants::PARAM_TEXT.to_string(), text.clone()));
            }
            SearchQuery::ByLocation {
                latitude,
                longitude,
            } => {
                let bbox = BoundingBox::around(
                    *latitude,
                    *longitude,
                    self.config.bbox_half_width,
                    self.config.bbox_half_height,
                );
                parameters.push((
                    global_constants::PARAM_BOUNDING_BOX.to_string(),
                    bbox.to_query_value(),
                ));
            }
        }

        parameters
    }
}

fn pick_random_page(total_pages: u32, page_cap: u32) -> u32 {
    // Floored at 1 so a zero-page result still issues a content request for
    // page 1; the empty page then surfaces as NoResults.
    let effective_pages = total_pages.min(page_cap).max(1);
    rand::rng().random_range(1..=effective_pages)
}

fn pick_random_index(len: usize) -> usize {
    rand::rng().random_range(0..len)
}

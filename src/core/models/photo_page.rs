use serde::Deserialize;

use crate::core::models::SearchError;
use crate::global_constants;

/// Typed view of the API response. Every consumed field is optional in the
/// wire format, so absence surfaces as `MissingField` instead of a decode
/// fault; fields this flow does not read are ignored.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    photos: Option<PhotoPage>,
}

#[derive(Debug, Deserialize)]
struct PhotoPage {
    pages: Option<u32>,
    photo: Option<Vec<PhotoRecord>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoRecord {
    url_m: Option<String>,
    title: Option<String>,
}

impl SearchResponse {
    pub fn parse(body: &str) -> Result<Self, SearchError> {
        serde_json::from_str(body).map_err(|error| SearchError::Parse(error.to_string()))
    }

    fn page(&self) -> Result<&PhotoPage, SearchError> {
        self.photos
            .as_ref()
            .ok_or(SearchError::MissingField("photos"))
    }

    pub fn page_count(&self) -> Result<u32, SearchError> {
        self.page()?
            .pages
            .ok_or(SearchError::MissingField("photos.pages"))
    }

    pub fn photos(&self) -> Result<&[PhotoRecord], SearchError> {
        self.page()?
            .photo
            .as_deref()
            .ok_or(SearchError::MissingField("photos.photo"))
    }
}

impl PhotoRecord {
    pub fn image_url(&self) -> Result<&str, SearchError> {
        self.url_m
            .as_deref()
            .ok_or(SearchError::MissingField("url_m"))
    }

    /// An absent title is a hard failure for this flow; a present but empty
    /// one falls back to the untitled placeholder.
    pub fn display_title(&self) -> Result<&str, SearchError> {
        let title = self
            .title
            .as_deref()
            .ok_or(SearchError::MissingField("title"))?;
        if title.is_empty() {
            Ok(global_constants::UNTITLED_PHOTO_TITLE)
        } else {
            Ok(title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_response_parses() {
        let body = r#"{
            "photos": {
                "pages": 5,
                "photo": [
                    {"url_m": "http://x/a.jpg", "title": "Pup", "id": "1", "owner": "z"}
                ]
            },
            "stat": "ok"
        }"#;

        let response = SearchResponse::parse(body).unwrap();
        assert_eq!(response.page_count().unwrap(), 5);

        let photos = response.photos().unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].image_url().unwrap(), "http://x/a.jpg");
        assert_eq!(photos[0].display_title().unwrap(), "Pup");
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        assert!(matches!(
            SearchResponse::parse("not json at all"),
            Err(SearchError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_photos_envelope() {
        let response = SearchResponse::parse(r#"{"stat": "fail"}"#).unwrap();
        assert!(matches!(
            response.page_count(),
            Err(SearchError::MissingField("photos"))
        ));
    }

    #[test]
    fn test_missing_page_count() {
        let response = SearchResponse::parse(r#"{"photos": {"photo": []}}"#).unwrap();
        assert!(matches!(
            response.page_count(),
            Err(SearchError::MissingField("photos.pages"))
        ));
    }

    #[test]
    fn test_missing_photo_list() {
        let response = SearchResponse::parse(r#"{"photos": {"pages": 3}}"#).unwrap();
        assert!(matches!(
            response.photos(),
            Err(SearchError::MissingField("photos.photo"))
        ));
    }

    #[test]
    fn test_record_without_image_url() {
        let response =
            SearchResponse::parse(r#"{"photos": {"pages": 1, "photo": [{"title": "Pup"}]}}"#)
                .unwrap();
        let photos = response.photos().unwrap();
        assert!(matches!(
            photos[0].image_url(),
            Err(SearchError::MissingField("url_m"))
        ));
    }

    #[test]
    fn test_record_without_title() {
        let response = SearchResponse::parse(
            r#"{"photos": {"pages": 1, "photo": [{"url_m": "http://x/a.jpg"}]}}"#,
        )
        .unwrap();
        let photos = response.photos().unwrap();
        assert!(matches!(
            photos[0].display_title(),
            Err(SearchError::MissingField("title"))
        ));
    }

    #[test]
    fn test_empty_title_falls_back_to_untitled() {
        let response = SearchResponse::parse(
            r#"{"photos": {"pages": 1, "photo": [{"url_m": "http://x/a.jpg", "title": ""}]}}"#,
        )
        .unwrap();
        let photos = response.photos().unwrap();
        assert_eq!(photos[0].display_title().unwrap(), "(Untitled)");
    }
}

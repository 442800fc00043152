use crate::core::models::SearchError;
use crate::global_constants;

/// What the user asked for, validated before any request goes out.
/// Immutable once built and discarded after one request cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    ByPhrase(String),
    ByLocation { latitude: f64, longitude: f64 },
}

impl SearchQuery {
    pub fn by_phrase(text: &str) -> Result<Self, SearchError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyInput);
        }
        Ok(SearchQuery::ByPhrase(trimmed.to_string()))
    }

    /// Takes the raw text the user typed; anything that is not a number
    /// inside the legal range is rejected before a request is issued.
    pub fn by_location(latitude_text: &str, longitude_text: &str) -> Result<Self, SearchError> {
        let latitude = parse_coordinate(latitude_text, global_constants::SEARCH_LAT_RANGE)?;
        let longitude = parse_coordinate(longitude_text, global_constants::SEARCH_LON_RANGE)?;
        Ok(SearchQuery::ByLocation {
            latitude,
            longitude,
        })
    }
}

fn parse_coordinate(text: &str, (floor, ceiling): (f64, f64)) -> Result<f64, SearchError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| SearchError::InvalidRange)?;
    if !value.is_finite() || value < floor || value > ceiling {
        return Err(SearchError::InvalidRange);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_is_trimmed() {
        let query = SearchQuery::by_phrase("  puppies  ").unwrap();
        assert_eq!(query, SearchQuery::ByPhrase("puppies".to_string()));
    }

    #[test]
    fn test_empty_phrase_is_rejected() {
        assert!(matches!(
            SearchQuery::by_phrase(""),
            Err(SearchError::EmptyInput)
        ));
        assert!(matches!(
            SearchQuery::by_phrase("   \t "),
            Err(SearchError::EmptyInput)
        ));
    }

    #[test]
    fn test_valid_location_parses() {
        let query = SearchQuery::by_location("48.85", "2.35").unwrap();
        assert_eq!(
            query,
            SearchQuery::ByLocation {
                latitude: 48.85,
                longitude: 2.35,
            }
        );
    }

    #[test]
    fn test_boundary_values_are_accepted() {
        assert!(SearchQuery::by_location("90", "180").is_ok());
        assert!(SearchQuery::by_location("-90", "-180").is_ok());
    }

    #[test]
    fn test_out_of_range_latitude_is_rejected() {
        assert!(matches!(
            SearchQuery::by_location("91", "0"),
            Err(SearchError::InvalidRange)
        ));
        assert!(matches!(
            SearchQuery::by_location("-90.1", "0"),
            Err(SearchError::InvalidRange)
        ));
    }

    #[test]
    fn test_out_of_range_longitude_is_rejected() {
        assert!(matches!(
            SearchQuery::by_location("0", "180.5"),
            Err(SearchError::InvalidRange)
        ));
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        assert!(matches!(
            SearchQuery::by_location("north", "2.35"),
            Err(SearchError::InvalidRange)
        ));
        assert!(matches!(
            SearchQuery::by_location("", ""),
            Err(SearchError::InvalidRange)
        ));
        assert!(matches!(
            SearchQuery::by_location("NaN", "0"),
            Err(SearchError::InvalidRange)
        ));
    }
}

use thiserror::Error;

use crate::global_constants;

/// Everything that can end a search. No variant is retried; each one is
/// terminal for the attempt that produced it.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search phrase is empty")]
    EmptyInput,

    #[error("latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidRange,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("response body was not valid JSON: {0}")]
    Parse(String),

    #[error("response is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("search returned no photos")]
    NoResults,

    #[error("image download failed: {0}")]
    ImageFetch(String),
}

impl SearchError {
    /// The message shown in place of the photo title when a search fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::EmptyInput => global_constants::MESSAGE_PHRASE_EMPTY,
            SearchError::InvalidRange => global_constants::MESSAGE_INVALID_RANGE,
            SearchError::NoResults => global_constants::MESSAGE_NO_PHOTOS,
            SearchError::Transport(_)
            | SearchError::Parse(_)
            | SearchError::MissingField(_)
            | SearchError::ImageFetch(_) => global_constants::MESSAGE_NO_IMAGE,
        }
    }
}

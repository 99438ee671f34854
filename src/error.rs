//! Error types for the search box.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while wiring up or running a user search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A required page element could not be found.
    #[error("page element not found: {selector}")]
    MissingElement {
        /// The selector that was looked up (`#id` or `.class`).
        selector: String,
    },

    /// The request could not be sent or its body could not be read.
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("invalid search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint or query produced an unparsable URL.
    #[error("invalid search url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A configuration file exists but could not be loaded.
    #[error("failed to load config from {path}: {source}")]
    Config {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SearchError {
    /// Builds a [`SearchError::MissingElement`] for an element id.
    pub fn missing_id(id: &str) -> Self {
        Self::MissingElement {
            selector: format!("#{id}"),
        }
    }

    /// Builds a [`SearchError::MissingElement`] for a class selector.
    pub fn missing_class(class: &str) -> Self {
        Self::MissingElement {
            selector: format!(".{class}"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_messages() {
        assert_eq!(
            SearchError::missing_id("searchUser").to_string(),
            "page element not found: #searchUser"
        );
        assert_eq!(
            SearchError::missing_class("btn-search").to_string(),
            "page element not found: .btn-search"
        );
    }

    #[test]
    fn decode_error_converts() {
        let err: SearchError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, SearchError::Decode(_)));
    }
}

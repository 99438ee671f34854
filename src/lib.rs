//! Debounced incremental search for the user-management table.
//!
//! A [`SearchController`] listens to a text field and a search button,
//! asks a [`UserSearchService`] for the matching table rows and replaces
//! the table body with whatever comes back.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod ui;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use services::{HttpUserSearchService, UserSearchService};
pub use ui::{Document, SearchController};

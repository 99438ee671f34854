//! Services talking to the outside world.

pub mod search_service;

pub use search_service::{HttpUserSearchService, SearchResponse, UserSearchService};

//! Views composed from page elements.

mod search_bar;

pub use search_bar::SearchController;

//! Page-side pieces of the search box.
//!
//! The UI is organized into:
//! - `components`: the input, table body and button elements
//! - `document`: the element registry handles are looked up in
//! - `views`: the search box controller wiring them together

pub mod components;
pub mod document;
pub mod views;

pub use components::{Button, ResultsContainer, TableBody, TextField, TextInput, TriggerControl};
pub use document::Document;
pub use views::SearchController;

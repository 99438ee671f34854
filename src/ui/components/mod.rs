//! Page elements used by the search box.
//!
//! Each element comes in two halves: a small trait describing what the
//! search controller needs from it, and an in-memory implementation that
//! the [`Document`](crate::ui::Document) hands out.

pub mod button;
pub mod input;
pub mod table;

use std::sync::Arc;

pub use button::{Button, TriggerControl};
pub use input::{TextField, TextInput};
pub use table::{ResultsContainer, TableBody};

/// Callback registered on an element event.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

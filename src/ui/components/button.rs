//! Button element.

use std::sync::{Mutex, PoisonError};

use super::Listener;

/// A control whose activation forces an immediate search.
pub trait TriggerControl: Send + Sync {
    /// Registers a listener fired on every activation.
    fn on_activate(&self, listener: Listener);
}

/// A clickable button.
#[derive(Default)]
pub struct Button {
    label: String,
    listeners: Mutex<Vec<Listener>>,
}

impl Button {
    /// Creates a button with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Returns the button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Registers a click listener.
    pub fn on_click(&self, listener: Listener) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    /// Fires every click listener in registration order.
    pub fn click(&self) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener();
        }
    }
}

impl TriggerControl for Button {
    fn on_activate(&self, listener: Listener) {
        self.on_click(listener);
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button").field("label", &self.label).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn click_fires_every_listener() {
        let button = Button::new("search");
        let clicks = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let clicks = clicks.clone();
            button.on_activate(Arc::new(move || {
                clicks.fetch_add(1, Ordering::SeqCst);
            }));
        }

        button.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
        assert_eq!(button.label(), "search");
    }

    #[test]
    fn click_without_listeners_is_noop() {
        Button::default().click();
    }
}

//! Text input element.

use std::sync::{Mutex, PoisonError};

use super::Listener;

/// A text field the search controller reads and listens to.
pub trait TextField: Send + Sync {
    /// Returns the current raw value.
    fn value(&self) -> String;

    /// Registers a listener fired after every keystroke.
    fn on_keyup(&self, listener: Listener);
}

/// A single-line text input.
#[derive(Default)]
pub struct TextInput {
    value: Mutex<String>,
    placeholder: Option<String>,
    listeners: Mutex<Vec<Listener>>,
}

impl TextInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Returns the placeholder text, if any.
    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Replaces the value without firing any event.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.into();
    }

    /// Fires every keyup listener in registration order.
    pub fn key_up(&self) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener();
        }
    }

    /// Sets the value as a keystroke would, then fires keyup.
    pub fn type_text(&self, value: impl Into<String>) {
        self.set_value(value);
        self.key_up();
    }
}

impl TextField for TextInput {
    fn value(&self) -> String {
        self.value.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn on_keyup(&self, listener: Listener) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }
}

impl std::fmt::Debug for TextInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextInput")
            .field("value", &self.value())
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn text_input_builder() {
        let input = TextInput::new().placeholder("Buscar usuario...");
        assert_eq!(input.placeholder_text(), Some("Buscar usuario..."));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn set_value_does_not_fire_keyup() {
        let input = TextInput::new();
        let fired = Arc::new(Mutex::new(0));
        let counter = fired.clone();
        input.on_keyup(Arc::new(move || *counter.lock().unwrap() += 1));

        input.set_value("ana");
        assert_eq!(*fired.lock().unwrap(), 0);

        input.type_text("anab");
        assert_eq!(*fired.lock().unwrap(), 1);
        assert_eq!(input.value(), "anab");
    }

    #[test]
    fn listener_sees_new_value() {
        let input = Arc::new(TextInput::new());
        let seen = Arc::new(Mutex::new(String::new()));

        let (reader, sink) = (input.clone(), seen.clone());
        input.on_keyup(Arc::new(move || *sink.lock().unwrap() = reader.value()));

        input.type_text(" bob ");
        assert_eq!(*seen.lock().unwrap(), " bob ");
    }
}

//! Element registry for a page.
//!
//! The search controller never reaches for ambient page state: the
//! [`Document`] is asked for each handle once, at initialization, and a
//! missing handle fails the whole setup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::ui::components::{Button, TableBody, TextInput};

/// A registered element and its classes.
#[derive(Debug, Clone)]
enum Element {
    Input(Arc<TextInput>),
    TableBody(Arc<TableBody>),
    Button(Arc<Button>),
}

#[derive(Debug, Clone)]
struct Entry {
    id: Option<String>,
    classes: Vec<String>,
    element: Element,
}

/// The set of elements on a page.
#[derive(Debug, Default)]
pub struct Document {
    entries: Vec<Entry>,
    by_id: HashMap<String, usize>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the user-management page described by `config`.
    pub fn user_management(config: &SearchConfig) -> Self {
        let mut document = Self::new();
        document.insert_input(
            &config.input_id,
            Arc::new(TextInput::new().placeholder("Buscar usuario...")),
        );
        document.insert_table_body(&config.container_id, Arc::new(TableBody::new()));
        document.insert_button(None, &[config.trigger_class.as_str(), "btn"], Arc::new(Button::new("search")));
        document
    }

    /// Adds a text input with the given id.
    pub fn insert_input(&mut self, id: &str, input: Arc<TextInput>) {
        self.insert(Some(id), &[], Element::Input(input));
    }

    /// Adds a table body with the given id.
    pub fn insert_table_body(&mut self, id: &str, tbody: Arc<TableBody>) {
        self.insert(Some(id), &[], Element::TableBody(tbody));
    }

    /// Adds a button with an optional id and a list of classes.
    pub fn insert_button(&mut self, id: Option<&str>, classes: &[&str], button: Arc<Button>) {
        self.insert(id, classes, Element::Button(button));
    }

    fn insert(&mut self, id: Option<&str>, classes: &[&str], element: Element) {
        let index = self.entries.len();
        if let Some(id) = id {
            // Later ids shadow earlier ones.
            self.by_id.insert(id.to_string(), index);
        }
        self.entries.push(Entry {
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            element,
        });
    }

    /// Returns the number of registered elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a text input by id.
    pub fn input_by_id(&self, id: &str) -> Result<Arc<TextInput>> {
        match self.element_by_id(id) {
            Some(Element::Input(input)) => Ok(input.clone()),
            _ => Err(SearchError::missing_id(id)),
        }
    }

    /// Looks up a table body by id.
    pub fn table_body_by_id(&self, id: &str) -> Result<Arc<TableBody>> {
        match self.element_by_id(id) {
            Some(Element::TableBody(tbody)) => Ok(tbody.clone()),
            _ => Err(SearchError::missing_id(id)),
        }
    }

    /// Returns the first button carrying `class`, in insertion order.
    pub fn button_by_class(&self, class: &str) -> Result<Arc<Button>> {
        self.entries
            .iter()
            .find_map(|entry| match &entry.element {
                Element::Button(button) if entry.classes.iter().any(|c| c == class) => {
                    Some(button.clone())
                }
                _ => None,
            })
            .ok_or_else(|| SearchError::missing_class(class))
    }

    fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.by_id
            .get(id)
            .and_then(|&index| self.entries.get(index))
            .filter(|entry| entry.id.as_deref() == Some(id))
            .map(|entry| &entry.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_management_page_has_all_handles() {
        let config = SearchConfig::default();
        let document = Document::user_management(&config);

        assert_eq!(document.len(), 3);
        assert!(document.input_by_id("searchUser").is_ok());
        assert!(document.table_body_by_id("tbodyUsuarios").is_ok());
        assert!(document.button_by_class("btn-search").is_ok());
    }

    #[test]
    fn lookup_by_wrong_kind_is_missing() {
        let document = Document::user_management(&SearchConfig::default());

        let err = document.input_by_id("tbodyUsuarios").unwrap_err();
        assert_eq!(err.to_string(), "page element not found: #tbodyUsuarios");
    }

    #[test]
    fn missing_button_class() {
        let mut document = Document::new();
        document.insert_button(Some("other"), &["btn"], Arc::new(Button::new("x")));

        let err = document.button_by_class("btn-search").unwrap_err();
        assert!(matches!(err, SearchError::MissingElement { selector } if selector == ".btn-search"));
    }

    #[test]
    fn first_button_with_class_wins() {
        let mut document = Document::new();
        document.insert_button(None, &["btn-search"], Arc::new(Button::new("first")));
        document.insert_button(None, &["btn-search"], Arc::new(Button::new("second")));

        assert_eq!(document.button_by_class("btn-search").unwrap().label(), "first");
    }
}

//! Table body element receiving search results.

use tokio::sync::watch;

/// Element whose content is wholesale replaced by each search response.
pub trait ResultsContainer: Send + Sync {
    /// Replaces the entire content with `markup`.
    fn replace_content(&self, markup: String);
}

/// A `<tbody>` holding rendered rows.
///
/// Every replacement is published on a watch channel so a renderer can
/// follow the content.
#[derive(Debug)]
pub struct TableBody {
    content: watch::Sender<String>,
}

impl TableBody {
    /// Creates an empty table body.
    pub fn new() -> Self {
        Self::with_content(String::new())
    }

    /// Creates a table body with initial rows.
    pub fn with_content(markup: impl Into<String>) -> Self {
        let (content, _) = watch::channel(markup.into());
        Self { content }
    }

    /// Returns the current markup.
    pub fn inner_html(&self) -> String {
        self.content.borrow().clone()
    }

    /// Replaces the markup and notifies subscribers.
    pub fn set_inner_html(&self, markup: impl Into<String>) {
        self.content.send_replace(markup.into());
    }

    /// Subscribes to content replacements.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.content.subscribe()
    }
}

impl Default for TableBody {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsContainer for TableBody {
    fn replace_content(&self, markup: String) {
        tracing::debug!(bytes = markup.len(), "replacing table body");
        self.set_inner_html(markup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replace_discards_previous_rows() {
        let tbody = TableBody::with_content("<tr><td>old</td></tr>");
        tbody.replace_content("<tr><td>new</td></tr>".to_string());
        assert_eq!(tbody.inner_html(), "<tr><td>new</td></tr>");
    }

    #[tokio::test]
    async fn subscribers_see_replacements() {
        let tbody = TableBody::new();
        let mut rx = tbody.subscribe();

        tbody.replace_content("<tr></tr>".to_string());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "<tr></tr>");
    }
}

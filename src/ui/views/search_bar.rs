//! Debounced search box controller.
//!
//! Wires the user-management search box:
//! - keystrokes schedule a search after a quiet period (300ms by default)
//! - clearing the field searches for `""` at once, restoring the full list
//! - the search button searches for the trimmed value at once
//!
//! Every response replaces the table body wholesale. Requests are neither
//! de-duplicated nor ordered: whichever response arrives last is shown.

use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::services::UserSearchService;
use crate::ui::components::{ResultsContainer, TextField, TriggerControl};
use crate::ui::Document;

/// Controller binding a text field, a results container and a trigger.
///
/// Event handlers spawn tokio tasks, so they must run inside a runtime.
pub struct SearchController<S: UserSearchService + 'static> {
    service: Arc<S>,
    input: Arc<dyn TextField>,
    container: Arc<dyn ResultsContainer>,
    debounce: Duration,
    /// The pending debounce timer, if any.
    pending: Mutex<Option<JoinHandle<()>>>,
    /// Timers and searches that have not finished yet.
    tasks: TaskTracker,
}

impl<S: UserSearchService + 'static> SearchController<S> {
    /// Looks up the page handles named in `config` and attaches to them.
    ///
    /// Fails without registering anything if any handle is missing.
    pub fn init(document: &Document, service: Arc<S>, config: &SearchConfig) -> Result<Arc<Self>> {
        let input = document.input_by_id(&config.input_id)?;
        let container = document.table_body_by_id(&config.container_id)?;
        let trigger = document.button_by_class(&config.trigger_class)?;

        Ok(Self::attach(input, container, trigger, service, config.debounce()))
    }

    /// Creates a controller and registers its keyup and click listeners.
    pub fn attach(
        input: Arc<dyn TextField>,
        container: Arc<dyn ResultsContainer>,
        trigger: Arc<dyn TriggerControl>,
        service: Arc<S>,
        debounce: Duration,
    ) -> Arc<Self> {
        let controller = Arc::new(Self {
            service,
            input: input.clone(),
            container,
            debounce,
            pending: Mutex::new(None),
            tasks: TaskTracker::new(),
        });

        let weak = Arc::downgrade(&controller);
        input.on_keyup(Arc::new(move || with_controller(&weak, |c| c.key_up())));

        let weak = Arc::downgrade(&controller);
        trigger.on_activate(Arc::new(move || with_controller(&weak, |c| c.trigger())));

        tracing::debug!(?debounce, "search box attached");
        controller
    }

    /// Returns the debounce window.
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Returns whether a debounce timer is waiting to fire.
    pub fn has_pending_timer(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    /// Waits until no debounce timer is pending and no search is in flight.
    ///
    /// Searches started by a timer firing during the wait are waited for too.
    pub async fn settle(&self) {
        self.tasks.close();
        self.tasks.wait().await;
        self.tasks.reopen();
    }

    /// Sends `query` to the server and renders the response.
    ///
    /// Failures are logged and leave the container untouched. The query is
    /// passed through verbatim.
    pub fn search(&self, query: impl Into<String>) -> JoinHandle<()> {
        spawn_search(&self.tasks, self.service.clone(), self.container.clone(), query.into())
    }

    /// Handles a keystroke in the text field.
    pub fn key_up(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(timer) = pending.take() {
            timer.abort();
        }

        if self.input.value().trim().is_empty() {
            self.search(String::new());
            return;
        }

        let service = self.service.clone();
        let container = self.container.clone();
        let input = self.input.clone();
        let tasks = self.tasks.clone();
        let debounce = self.debounce;
        *pending = Some(self.tasks.spawn(async move {
            tokio::time::sleep(debounce).await;
            // Separate task so a later keystroke cannot cancel the request.
            spawn_search(&tasks, service, container, input.value());
        }));
    }

    /// Handles activation of the search button.
    ///
    /// A pending debounce timer is left alone and may still fire.
    pub fn trigger(&self) {
        self.search(self.input.value().trim());
    }
}

impl<S: UserSearchService + 'static> std::fmt::Debug for SearchController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("debounce", &self.debounce)
            .field("has_pending_timer", &self.has_pending_timer())
            .finish_non_exhaustive()
    }
}

fn with_controller<S: UserSearchService + 'static>(
    weak: &Weak<SearchController<S>>,
    f: impl FnOnce(&SearchController<S>),
) {
    if let Some(controller) = weak.upgrade() {
        f(&controller);
    }
}

fn spawn_search<S: UserSearchService + 'static>(
    tasks: &TaskTracker,
    service: Arc<S>,
    container: Arc<dyn ResultsContainer>,
    query: String,
) -> JoinHandle<()> {
    tasks.spawn(async move {
        tracing::debug!(query = %query, "searching users");
        match service.fetch_table(&query).await {
            Ok(markup) => container.replace_content(markup),
            Err(error) => tracing::error!(%error, query = %query, "user search failed"),
        }
    })
}

//! Application wiring and lifecycle.
//!
//! The binary drives the user-management page headlessly: each stdin line
//! is either a command or the new contents of the search field, and every
//! table replacement is printed to stdout.

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::watch;

use crate::config::SearchConfig;
use crate::logging;
use crate::services::{HttpUserSearchService, UserSearchService};
use crate::ui::{Document, SearchController};

/// A line of driver input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the field contents and fire a keystroke.
    Type(String),
    /// Press the search button.
    Click,
    /// Stop reading input.
    Quit,
}

impl Command {
    /// Parses one input line. Anything that is not a command is typed text.
    pub fn parse(line: &str) -> Self {
        match line.trim_end_matches(['\r', '\n']) {
            "/click" => Command::Click,
            "/quit" => Command::Quit,
            text => Command::Type(text.to_string()),
        }
    }
}

/// Main application entry point
pub struct App;

impl App {
    /// Run the application until stdin closes or `/quit` is read.
    pub async fn run() -> Result<()> {
        logging::init();

        let config = SearchConfig::load()?;
        let service = Arc::new(HttpUserSearchService::new(&config)?);
        tracing::info!(endpoint = %service.endpoint(), "user search ready");

        let document = Document::user_management(&config);
        let controller = SearchController::init(&document, service, &config)?;

        Self::drive(&document, &config, &controller, tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Feeds `reader` lines to the page and writes every table replacement
    /// to `out`.
    ///
    /// Once input ends, waits for pending timers and searches and renders
    /// their results before returning.
    pub async fn drive<S, R, W>(
        document: &Document,
        config: &SearchConfig,
        controller: &SearchController<S>,
        reader: R,
        mut out: W,
    ) -> Result<()>
    where
        S: UserSearchService + 'static,
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let input = document.input_by_id(&config.input_id)?;
        let button = document.button_by_class(&config.trigger_class)?;
        let mut rows = document.table_body_by_id(&config.container_id)?.subscribe();

        let mut lines = BufReader::new(reader).lines();
        loop {
            tokio::select! {
                Ok(()) = rows.changed() => Self::render(&mut rows, &mut out).await?,
                line = lines.next_line() => match line?.as_deref().map(Command::parse) {
                    None | Some(Command::Quit) => break,
                    Some(Command::Click) => button.click(),
                    Some(Command::Type(text)) => input.type_text(text),
                },
            }
        }

        tracing::debug!(?controller, "input closed, waiting for searches");
        let settle = controller.settle();
        tokio::pin!(settle);
        loop {
            tokio::select! {
                biased;
                Ok(()) = rows.changed() => Self::render(&mut rows, &mut out).await?,
                () = &mut settle => break,
            }
        }
        if rows.has_changed().unwrap_or(false) {
            Self::render(&mut rows, &mut out).await?;
        }
        Ok(())
    }

    /// Writes the current table body as one line.
    async fn render<W: AsyncWrite + Unpin>(
        rows: &mut watch::Receiver<String>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let markup = rows.borrow_and_update().clone();
        out.write_all(format!("{markup}\n").as_bytes()).await?;
        out.flush().await
    }
}

//! Interactive search-select-download session.
//!
//! The session owns every user-facing prompt and all retry/exit decisions.
//! It advances through an explicit state machine: a query prompt leads to a
//! search, search results lead to a numbered selection, a selection leads to
//! a download, and `quit` at any prompt ends the session with no path.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::catalog::{CatalogClient, CatalogEntry, MAX_SEARCH_RESULTS, selectable_entries};

use super::error::FetchError;
use super::naming;
use super::spinner;
use super::store::ContentStore;

/// Terminal interaction seam.
///
/// The session talks to the user exclusively through this trait, so tests
/// can script the whole conversation.
pub trait Console {
    /// Prints `message` without a trailing newline and reads one input line.
    ///
    /// # Errors
    ///
    /// Returns an IO error when the input stream is closed or unreadable.
    fn prompt(&mut self, message: &str) -> io::Result<String>;

    /// Prints one line of output to the user.
    fn say(&mut self, message: &str);
}

/// [`Console`] over the process's stdin/stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        stdout.write_all(message.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        let bytes_read = io::stdin().read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line)
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Session lifecycle.
///
/// `AwaitingQuery` is re-entered on empty selection input and after
/// recoverable search failures; `Completed` and `Cancelled` are terminal.
#[derive(Debug)]
pub enum SessionState {
    AwaitingQuery,
    Searching { query: String },
    AwaitingSelection { books: Vec<CatalogEntry> },
    Downloading { book: CatalogEntry },
    Completed { path: PathBuf },
    Cancelled,
}

impl SessionState {
    fn label(&self) -> &'static str {
        match self {
            Self::AwaitingQuery => "awaiting_query",
            Self::Searching { .. } => "searching",
            Self::AwaitingSelection { .. } => "awaiting_selection",
            Self::Downloading { .. } => "downloading",
            Self::Completed { .. } => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Orchestrates the interactive acquisition flow.
pub struct AcquisitionSession<C: Console> {
    client: CatalogClient,
    store: ContentStore,
    console: C,
}

impl<C: Console> AcquisitionSession<C> {
    /// Creates a session over the given catalog client, store, and console.
    pub fn new(client: CatalogClient, store: ContentStore, console: C) -> Self {
        Self {
            client,
            store,
            console,
        }
    }

    /// Runs the session to a terminal state.
    ///
    /// Returns `Ok(Some(path))` when a book was downloaded and persisted,
    /// `Ok(None)` when the user quit or the selected download failed (the
    /// failure is surfaced to the user before the session ends).
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Prompt` when the console itself fails.
    pub async fn run(mut self) -> Result<Option<PathBuf>, FetchError> {
        let mut state = SessionState::AwaitingQuery;
        loop {
            debug!(state = state.label(), "session transition");
            state = match state {
                SessionState::AwaitingQuery => self.await_query()?,
                SessionState::Searching { query } => self.search(&query).await?,
                SessionState::AwaitingSelection { books } => self.select(books)?,
                SessionState::Downloading { book } => self.download(book).await?,
                SessionState::Completed { path } => return Ok(Some(path)),
                SessionState::Cancelled => return Ok(None),
            };
        }
    }

    fn await_query(&mut self) -> Result<SessionState, FetchError> {
        let input = self.prompt("Search Project Gutenberg (or type 'quit' to exit): ")?;
        if is_quit(&input) {
            return Ok(self.quit());
        }
        Ok(SessionState::Searching {
            query: input.trim().to_string(),
        })
    }

    async fn search(&mut self, query: &str) -> Result<SessionState, FetchError> {
        let outcome =
            spinner::with_spinner("Searching Project Gutenberg", self.client.search(query)).await;

        let results = match outcome {
            Ok(results) => results,
            Err(error) => {
                warn!(%error, "catalog search failed");
                self.console.say(&format!("Error: {error}"));
                let input =
                    self.prompt("Press Enter to try another search, or type 'quit' to exit: ")?;
                if is_quit(&input) {
                    return Ok(self.quit());
                }
                return Ok(SessionState::AwaitingQuery);
            }
        };

        let books = selectable_entries(results, MAX_SEARCH_RESULTS);
        if books.is_empty() {
            self.console.say("No books found matching your search term.");
            self.console.say("Please try a different search term.");
            return Ok(SessionState::AwaitingQuery);
        }
        Ok(SessionState::AwaitingSelection { books })
    }

    fn select(&mut self, mut books: Vec<CatalogEntry>) -> Result<SessionState, FetchError> {
        self.console
            .say(&format!("Found {} books with plain text format:", books.len()));
        for (index, book) in books.iter().enumerate() {
            self.console.say(&format!(
                "{}. {} — {} (ID {})",
                index + 1,
                book.title,
                book.authors_display(),
                book.id
            ));
        }

        loop {
            let input =
                self.prompt("Choose a number (or press Enter to search again, 'quit' to exit): ")?;
            let choice = input.trim();

            if choice.is_empty() {
                return Ok(SessionState::AwaitingQuery);
            }
            if is_quit(choice) {
                return Ok(self.quit());
            }

            match choice.parse::<usize>() {
                Ok(number) if (1..=books.len()).contains(&number) => {
                    return Ok(SessionState::Downloading {
                        book: books.swap_remove(number - 1),
                    });
                }
                Ok(_) => self.console.say("Invalid choice. Please try again."),
                Err(_) => self.console.say("Please enter a valid number."),
            }
        }
    }

    async fn download(&mut self, book: CatalogEntry) -> Result<SessionState, FetchError> {
        match self.fetch_and_persist(&book).await {
            Ok(path) => {
                self.console.say(&format!("Saved to {}", path.display()));
                Ok(SessionState::Completed { path })
            }
            Err(error) => {
                warn!(%error, "book download failed");
                self.console
                    .say(&format!("Error downloading book: {error}"));
                Ok(SessionState::Cancelled)
            }
        }
    }

    async fn fetch_and_persist(&self, book: &CatalogEntry) -> Result<PathBuf, FetchError> {
        let locator = book
            .plain_text_locator()
            .ok_or_else(|| FetchError::no_plain_text(&book.title))?;
        let content =
            spinner::with_spinner("Downloading book", self.client.fetch_content(locator)).await?;
        self.store.persist(&naming::file_name(book), &content).await
    }

    fn prompt(&mut self, message: &str) -> Result<String, FetchError> {
        self.console.prompt(message).map_err(FetchError::prompt)
    }

    fn quit(&mut self) -> SessionState {
        self.console.say("Closing BookBot...");
        SessionState::Cancelled
    }
}

fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("quit")
}

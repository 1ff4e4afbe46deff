//! Application state and core logic

use std::path::PathBuf;

use crate::history::HistoryStore;
use crate::search::EnrichedMovie;

/// Messages sent from background search tasks to the main app
///
/// Every message carries the generation of the search that produced it so
/// the app can throw away results of a search the user has already
/// abandoned.
#[derive(Debug)]
pub enum AppMessage {
    /// Search completed with enriched results
    SearchComplete {
        generation: u64,
        query: String,
        movies: Vec<EnrichedMovie>,
    },
    /// Search failed with error
    SearchError { generation: u64, message: String },
}

/// Application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// User is typing a search query
    Input,
    /// Performing search
    Searching,
    /// Showing enriched results
    Results,
    /// Showing error message
    Error,
}

/// Main application structure
pub struct App {
    pub state: AppState,
    pub input: String,
    pub movies: Vec<EnrichedMovie>,
    pub selected_index: usize,
    /// Highlighted entry in the recent-searches panel, if any
    pub history_index: Option<usize>,
    pub history: HistoryStore,
    pub error_message: Option<String>,
    /// Status message shown in UI
    pub status_message: String,
    /// Bumped on every submitted search; stale completions are dropped
    generation: u64,
}

impl App {
    /// Create new app instance
    ///
    /// A corrupt or unreadable history file is downgraded to an empty
    /// history plus a warning in the status line.
    pub fn new(history_path: PathBuf) -> Self {
        let (history, status_message) = match HistoryStore::open(history_path.clone()) {
            Ok(history) => (history, String::new()),
            Err(e) => (
                HistoryStore::empty(history_path),
                format!("Warning: {}", e),
            ),
        };

        Self {
            state: AppState::Input,
            input: String::new(),
            movies: Vec::new(),
            selected_index: 0,
            history_index: None,
            history,
            error_message: None,
            status_message,
            generation: 0,
        }
    }

    /// Start a search, invalidating any search still in flight
    ///
    /// Returns the generation the spawned task must stamp its messages with.
    pub fn start_search(&mut self) -> u64 {
        self.generation += 1;
        self.state = AppState::Searching;
        self.movies.clear();
        self.selected_index = 0;
        self.history_index = None;
        self.status_message = "Searching...".to_string();
        self.generation
    }

    /// Handle a completed search
    ///
    /// Messages from a superseded search are ignored; the display always
    /// reflects the most recently issued query.
    pub fn finish_search(&mut self, generation: u64, query: &str, movies: Vec<EnrichedMovie>) {
        if generation != self.generation {
            return;
        }

        if movies.is_empty() {
            self.show_error("No movies found for your query.");
            return;
        }

        let count = movies.len();
        self.movies = movies;
        self.state = AppState::Results;
        self.selected_index = 0;
        self.status_message = format!("Found {} movie(s)", count);

        if let Err(e) = self.history.record(query) {
            self.status_message = format!("Warning: {}", e);
        }
    }

    /// Handle a failed search, unless it has been superseded
    pub fn search_error(&mut self, generation: u64, message: &str) {
        if generation != self.generation {
            return;
        }
        self.show_error(message);
    }

    /// Show error message
    pub fn show_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
        self.state = AppState::Error;
    }

    /// Dismiss error
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
        self.state = if self.movies.is_empty() {
            AppState::Input
        } else {
            AppState::Results
        };
    }

    /// Move to next result
    pub fn next_result(&mut self) {
        if !self.movies.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.movies.len();
        }
    }

    /// Move to previous result
    pub fn previous_result(&mut self) {
        if !self.movies.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.movies.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    /// Currently highlighted result, if any
    pub fn selected_movie(&self) -> Option<&EnrichedMovie> {
        self.movies.get(self.selected_index)
    }

    /// Move the recent-searches highlight down (into the list on first press)
    pub fn history_next(&mut self) {
        let len = self.history.list().len();
        if len == 0 {
            return;
        }
        self.history_index = Some(match self.history_index {
            None => 0,
            Some(i) => (i + 1) % len,
        });
    }

    /// Move the recent-searches highlight up
    pub fn history_previous(&mut self) {
        let len = self.history.list().len();
        if len == 0 {
            return;
        }
        self.history_index = Some(match self.history_index {
            None | Some(0) => len - 1,
            Some(i) => i - 1,
        });
    }

    /// Query to submit on Enter: the highlighted recent search, else the
    /// typed input (trimmed). `None` when there is nothing to submit.
    pub fn query_to_submit(&self) -> Option<String> {
        if let Some(i) = self.history_index {
            return self.history.list().get(i).cloned();
        }

        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Typing resets the history highlight back to the input box
    pub fn push_input_char(&mut self, c: char) {
        self.history_index = None;
        self.input.push(c);
    }

    pub fn pop_input_char(&mut self) {
        self.history_index = None;
        self.input.pop();
    }

    /// Clear the query input and any history highlight
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.history_index = None;
    }

    /// Go back to input mode, dropping the current result set
    pub fn back_to_input(&mut self) {
        self.state = AppState::Input;
        self.movies.clear();
        self.selected_index = 0;
        self.status_message.clear();
    }

    /// Scroll offset for the result list, given how many items fit on screen
    pub fn scroll_offset(&self, items_per_screen: usize) -> usize {
        if items_per_screen == 0 {
            return self.selected_index;
        }

        if self.selected_index >= items_per_screen {
            self.selected_index - (items_per_screen - 1)
        } else {
            0
        }
    }
}

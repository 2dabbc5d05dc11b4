//! # Session State Module
//!
//! Explicit state container for one interactive session. Everything the UI
//! can observe - the ingredient catalog, the current pantry selection, the
//! last result set, the in-flight flag and the last error message - lives in
//! one owned [`Session`] value and changes only through its named transition
//! methods. No field is shared or mutated from more than one place.
//!
//! # State Machine
//!
//! - **Idle**: selection editable, `find` allowed once non-empty
//! - **Searching**: `in_flight` set, a second `find` is refused
//! - Back to **Idle** via `search_succeeded` or `search_failed`

use crate::autocomplete::suggest;
use crate::matching::ScoredRecipe;

/// All user-visible state for one session.
#[derive(Debug, Default)]
pub struct Session {
    /// Ingredient catalog fetched at startup; empty when unavailable.
    catalog: Vec<String>,
    /// The user's pantry, in selection order.
    selected: Vec<String>,
    /// Ranked results of the most recent successful search.
    results: Vec<ScoredRecipe>,
    /// A search batch is currently being awaited.
    in_flight: bool,
    /// Message from the most recent failed search or validation.
    error: Option<String>,
}

impl Session {
    /// Create a session over the given (possibly empty) catalog.
    pub fn new(catalog: Vec<String>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn results(&self) -> &[ScoredRecipe] {
        &self.results
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Catalog suggestions for a typed prefix, capped at ten.
    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        suggest(&self.catalog, input)
    }

    /// Add an ingredient to the selection.
    ///
    /// The name is trimmed first. Returns `false` without changing the
    /// selection when the trimmed name is empty or already selected
    /// (exact string match; case-variant synonyms stay allowed, matching
    /// the upstream catalog's own looseness).
    pub fn add_ingredient(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.selected.iter().any(|s| s == name) {
            return false;
        }
        self.selected.push(name.to_string());
        true
    }

    /// Remove an ingredient from the selection by exact name.
    ///
    /// Returns `false` when the name was not selected.
    pub fn remove_ingredient(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.selected.len();
        self.selected.retain(|s| s != name);
        self.selected.len() != before
    }

    /// Whether a search may start right now.
    ///
    /// Mirrors the disabled search button: refused while a search is in
    /// flight or while nothing is selected.
    pub fn can_search(&self) -> bool {
        !self.in_flight && !self.selected.is_empty()
    }

    /// Mark a search as started: sets the in-flight flag and clears the
    /// previous error. Returns `false` when a search may not start.
    pub fn search_started(&mut self) -> bool {
        if !self.can_search() {
            return false;
        }
        self.in_flight = true;
        self.error = None;
        true
    }

    /// Store a successful search's ranked results.
    pub fn search_succeeded(&mut self, results: Vec<ScoredRecipe>) {
        self.in_flight = false;
        self.error = None;
        self.results = results;
    }

    /// Record a failed search. The selection is left intact so the user can
    /// retry; the previous results are discarded for this attempt.
    pub fn search_failed(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.results.clear();
        self.error = Some(message.into());
    }

    /// Drop results and error, keep catalog and selection.
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.error = None;
    }
}

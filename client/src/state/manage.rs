//! Saved-diagram list state for the management view.

#[cfg(test)]
#[path = "manage_test.rs"]
mod manage_test;

use diagram::catalog::filter_by_name;
use diagram::model::Diagram;

/// List, search term, and pending delete for `/manage-diagrams`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManageState {
    pub diagrams: Vec<Diagram>,
    pub search: String,
    /// Name awaiting delete confirmation.
    pub pending_delete: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Heading and hint shown when no cards are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
    /// Whether to offer a shortcut back to the editor.
    pub offer_create: bool,
}

const NOTHING_SAVED: EmptyState = EmptyState {
    title: "No diagrams yet",
    hint: "Create your first diagram to get started",
    offer_create: true,
};

const NOTHING_MATCHED: EmptyState =
    EmptyState { title: "No diagrams found", hint: "Try adjusting your search terms", offer_create: false };

impl ManageState {
    /// Diagrams matching the current search, newest first.
    pub fn visible(&self) -> Vec<Diagram> {
        filter_by_name(&self.diagrams, &self.search).into_iter().cloned().collect()
    }

    /// `None` while at least one card is visible.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !filter_by_name(&self.diagrams, &self.search).is_empty() {
            return None;
        }
        Some(if self.search.is_empty() { NOTHING_SAVED } else { NOTHING_MATCHED })
    }

    /// Badge text such as `1 diagram` or `3 diagrams`.
    pub fn count_label(&self) -> String {
        let count = self.diagrams.len();
        format!("{count} diagram{}", if count == 1 { "" } else { "s" })
    }

    pub fn replace(&mut self, diagrams: Vec<Diagram>) {
        self.diagrams = diagrams;
        self.loading = false;
        self.error = None;
    }
}

//! Actions for the Todo feature.
//!
//! Each variant describes one thing the user asked for. Constructors are pure
//! and do no validation; whether an index is in range is decided by the
//! reducer against the state it is applied to.

use serde::{Deserialize, Serialize};
use tasklist_macros::Action;

/// Everything that can happen to a [`TodoState`](crate::TodoState)
///
/// Serialized as an internally tagged object, e.g.
/// `{"type": "AddTodo", "text": "Buy milk"}`.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TodoAction {
    /// Replace the draft with `text`
    CreateDraft {
        /// New draft text
        text: String,
    },

    /// Append a new incomplete todo and clear the draft
    AddTodo {
        /// Task text (usually the current draft, but not required to be)
        text: String,
    },

    /// Delete the todo at `index`
    #[indexed]
    RemoveTodo {
        /// Position in `todos`
        index: usize,
    },

    /// Mark the todo at `index` complete and move it behind every incomplete todo
    #[indexed]
    MarkComplete {
        /// Position in `todos`
        index: usize,
    },

    /// Append a copy of the todo at `index` to the favorites
    #[indexed]
    FavoriteTodo {
        /// Position in `todos`
        index: usize,
    },

    /// Delete the favorite at `index`
    #[indexed]
    RemoveFavorite {
        /// Position in `favorites`
        index: usize,
    },
}

impl TodoAction {
    /// Creates a `CreateDraft` action
    #[must_use]
    pub fn create_draft(text: impl Into<String>) -> Self {
        Self::CreateDraft { text: text.into() }
    }

    /// Creates an `AddTodo` action
    #[must_use]
    pub fn add_todo(text: impl Into<String>) -> Self {
        Self::AddTodo { text: text.into() }
    }

    /// Creates a `RemoveTodo` action
    #[must_use]
    pub const fn remove_todo(index: usize) -> Self {
        Self::RemoveTodo { index }
    }

    /// Creates a `MarkComplete` action
    #[must_use]
    pub const fn mark_complete(index: usize) -> Self {
        Self::MarkComplete { index }
    }

    /// Creates a `FavoriteTodo` action
    #[must_use]
    pub const fn favorite_todo(index: usize) -> Self {
        Self::FavoriteTodo { index }
    }

    /// Creates a `RemoveFavorite` action
    #[must_use]
    pub const fn remove_favorite(index: usize) -> Self {
        Self::RemoveFavorite { index }
    }
}

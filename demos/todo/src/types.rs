//! Domain types for the Todo feature.
//!
//! A todo list is an ordered list of tasks, an in-progress draft, and a
//! separately ordered list of favorites. Every value here is plain owned data:
//! the reducer builds new values instead of editing old ones.

use serde::{Deserialize, Serialize};

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    /// Text of the task, fixed at creation
    pub task: String,
    /// Whether the task is done
    pub complete: bool,
}

impl TodoItem {
    /// Creates a new, incomplete todo item
    #[must_use]
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            complete: false,
        }
    }

    /// Returns a completed copy of this item
    #[must_use]
    pub fn completed(&self) -> Self {
        Self {
            task: self.task.clone(),
            complete: true,
        }
    }
}

/// State of the todo list
///
/// Ordering rules applied by `TodoReducer`:
/// - every `MarkComplete` moves completed items behind incomplete ones,
///   without reordering items within the same completion group
/// - `AddTodo` always appends at the end, so a new incomplete item may sit
///   behind completed ones until the next `MarkComplete`
/// - `draft` changes only on `CreateDraft` (set) and `AddTodo` (cleared)
/// - `favorites` changes only by append (`FavoriteTodo`) and removal
///   (`RemoveFavorite`)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Tasks in display order; new tasks are appended at the end
    pub todos: Vec<TodoItem>,
    /// Text typed but not yet added
    pub draft: String,
    /// Snapshots of favorited tasks, in the order they were favorited
    pub favorites: Vec<TodoItem>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            draft: String::new(),
            favorites: Vec::new(),
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.complete).count()
    }

    /// Returns the number of favorites
    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Returns the todo at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.todos.get(index)
    }

    /// Returns the favorite at `index`
    #[must_use]
    pub fn favorite(&self, index: usize) -> Option<&TodoItem> {
        self.favorites.get(index)
    }

    /// Returns true when there are no todos and no favorites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty() && self.favorites.is_empty()
    }
}

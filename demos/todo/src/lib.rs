//! Todo list with drafts and favorites.
//!
//! This crate shows a complete feature built on the Tasklist reducer
//! architecture. It demonstrates:
//!
//! - A plain-data state ([`TodoState`]) with a draft and a favorites list
//! - Index-addressed actions (`#[derive(Action)]`, `#[indexed]`)
//! - A pure, total reducer where out-of-range indices are no-ops
//! - Completed todos kept behind incomplete ones, order preserved
//! - Testing with `ReducerTest`
//!
//! # Quick Start
//!
//! ```
//! use todo::{TodoAction, todo_store};
//!
//! let store = todo_store();
//! store.subscribe(|state| println!("{} todos", state.count()));
//!
//! store.dispatch(TodoAction::create_draft("Buy milk"));
//! store.dispatch(TodoAction::add_todo("Buy milk"));
//! store.dispatch(TodoAction::mark_complete(0));
//!
//! let state = store.snapshot();
//! assert_eq!(state.completed_count(), 1);
//! assert!(state.draft.is_empty());
//! ```

pub mod actions;
pub mod reducer;
pub mod types;

use tasklist_runtime::{Store, StoreConfig};

// Re-export commonly used types
pub use actions::TodoAction;
pub use reducer::TodoReducer;
pub use types::{TodoItem, TodoState};

/// Store specialized for the todo list
pub type TodoStore = Store<TodoState, TodoAction, TodoReducer>;

/// Creates a store holding an empty todo list
#[must_use]
pub fn todo_store() -> TodoStore {
    todo_store_with_config(StoreConfig::default().with_name("todos"))
}

/// Creates a store holding an empty todo list, with custom configuration
#[must_use]
pub fn todo_store_with_config(config: StoreConfig) -> TodoStore {
    Store::with_config(TodoState::new(), TodoReducer::new(), config)
}

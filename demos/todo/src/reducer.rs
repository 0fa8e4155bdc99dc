//! Reducer logic for the Todo feature.
//!
//! Every transition builds a new [`TodoState`]; the state it is given is never
//! touched. Index-carrying actions that point outside their list are no-ops.

use crate::actions::TodoAction;
use crate::types::{TodoItem, TodoState};
use tasklist_core::reducer::Reducer;

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Copy of `items` without the element at `index`, or `None` if out of range
fn without(items: &[TodoItem], index: usize) -> Option<Vec<TodoItem>> {
    if index >= items.len() {
        return None;
    }

    Some(
        items
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, item)| item.clone())
            .collect(),
    )
}

/// Stable partition: incomplete items first, then complete items
///
/// Both groups keep their input order. `Iterator::partition` visits items
/// front to back and pushes onto each side in that order.
fn completed_last(todos: Vec<TodoItem>) -> Vec<TodoItem> {
    let (mut incomplete, complete): (Vec<_>, Vec<_>) =
        todos.into_iter().partition(|todo| !todo.complete);
    incomplete.extend(complete);
    incomplete
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State {
        match action {
            TodoAction::CreateDraft { text } => TodoState {
                todos: state.todos.clone(),
                draft: text,
                favorites: state.favorites.clone(),
            },

            TodoAction::AddTodo { text } => {
                let mut todos = state.todos.clone();
                todos.push(TodoItem::new(text));

                TodoState {
                    todos,
                    draft: String::new(),
                    favorites: state.favorites.clone(),
                }
            },

            TodoAction::RemoveTodo { index } => match without(&state.todos, index) {
                Some(todos) => TodoState {
                    todos,
                    draft: state.draft.clone(),
                    favorites: state.favorites.clone(),
                },
                None => state.clone(),
            },

            TodoAction::MarkComplete { index } => {
                if index >= state.todos.len() {
                    return state.clone();
                }

                let marked = state
                    .todos
                    .iter()
                    .enumerate()
                    .map(|(position, todo)| {
                        if position == index {
                            todo.completed()
                        } else {
                            todo.clone()
                        }
                    })
                    .collect();

                TodoState {
                    todos: completed_last(marked),
                    draft: state.draft.clone(),
                    favorites: state.favorites.clone(),
                }
            },

            TodoAction::FavoriteTodo { index } => {
                let Some(todo) = state.todos.get(index) else {
                    return state.clone();
                };

                let mut favorites = state.favorites.clone();
                favorites.push(todo.clone());

                TodoState {
                    todos: state.todos.clone(),
                    draft: state.draft.clone(),
                    favorites,
                }
            },

            TodoAction::RemoveFavorite { index } => match without(&state.favorites, index) {
                Some(favorites) => TodoState {
                    todos: state.todos.clone(),
                    draft: state.draft.clone(),
                    favorites,
                },
                None => state.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code

    use super::*;
    use tasklist_testing::ReducerTest;

    fn item(task: &str, complete: bool) -> TodoItem {
        TodoItem {
            task: task.to_string(),
            complete,
        }
    }

    fn state_with(todos: Vec<TodoItem>) -> TodoState {
        TodoState {
            todos,
            ..TodoState::new()
        }
    }

    #[test]
    fn test_create_draft() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![item("Walk dog", false)]))
            .when_action(TodoAction::create_draft("Buy milk"))
            .then_state(|state| {
                assert_eq!(state.draft, "Buy milk");
                assert_eq!(state.count(), 1);
                assert_eq!(state.favorite_count(), 0);
            })
            .run();
    }

    #[test]
    fn test_create_draft_replaces_previous_draft() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState::new())
            .when_actions([
                TodoAction::create_draft("Buy"),
                TodoAction::create_draft("Buy milk"),
            ])
            .then_state(|state| assert_eq!(state.draft, "Buy milk"))
            .run();
    }

    #[test]
    fn test_add_todo_appends_and_clears_draft() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState {
                todos: vec![item("Walk dog", false)],
                draft: "Buy milk".to_string(),
                favorites: Vec::new(),
            })
            .when_action(TodoAction::add_todo("Buy milk"))
            .then_state(|state| {
                assert_eq!(
                    state.todos,
                    vec![item("Walk dog", false), item("Buy milk", false)]
                );
                assert!(state.draft.is_empty());
            })
            .run();
    }

    #[test]
    fn test_add_todo_ignores_draft_contents() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState {
                draft: "Something else".to_string(),
                ..TodoState::new()
            })
            .when_action(TodoAction::add_todo("Buy milk"))
            .then_state(|state| {
                assert_eq!(state.get(0).unwrap().task, "Buy milk");
                assert!(state.draft.is_empty());
            })
            .run();
    }

    #[test]
    fn test_add_todo_appends_after_completed_items() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![item("Buy milk", true)]))
            .when_action(TodoAction::add_todo("Walk dog"))
            .then_state(|state| {
                assert_eq!(
                    state.todos,
                    vec![item("Buy milk", true), item("Walk dog", false)]
                );
            })
            .run();
    }

    #[test]
    fn test_remove_todo() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![
                item("a", false),
                item("b", false),
                item("c", true),
            ]))
            .when_action(TodoAction::remove_todo(1))
            .then_state(|state| {
                assert_eq!(state.todos, vec![item("a", false), item("c", true)]);
            })
            .run();
    }

    #[test]
    fn test_remove_todo_out_of_range() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![item("a", false)]))
            .when_action(TodoAction::remove_todo(1))
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_remove_todo_keeps_favorites() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState {
                todos: vec![item("a", false)],
                draft: "typing".to_string(),
                favorites: vec![item("a", false)],
            })
            .when_action(TodoAction::remove_todo(0))
            .then_state(|state| {
                assert!(state.todos.is_empty());
                assert_eq!(state.favorites, vec![item("a", false)]);
                assert_eq!(state.draft, "typing");
            })
            .run();
    }

    #[test]
    fn test_mark_complete_moves_item_behind_incomplete() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![item("Buy milk", false), item("Walk dog", false)]))
            .when_action(TodoAction::mark_complete(0))
            .then_state(|state| {
                assert_eq!(
                    state.todos,
                    vec![item("Walk dog", false), item("Buy milk", true)]
                );
            })
            .run();
    }

    #[test]
    fn test_mark_complete_is_stable() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![
                item("a", false),
                item("b", false),
                item("c", false),
                item("d", true),
                item("e", true),
            ]))
            .when_action(TodoAction::mark_complete(1))
            .then_state(|state| {
                assert_eq!(
                    state.todos,
                    vec![
                        item("a", false),
                        item("c", false),
                        item("b", true),
                        item("d", true),
                        item("e", true),
                    ]
                );
            })
            .run();
    }

    #[test]
    fn test_mark_complete_repeated() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![
                item("a", false),
                item("b", false),
                item("c", false),
            ]))
            .when_actions([
                TodoAction::mark_complete(2),
                TodoAction::mark_complete(0),
                TodoAction::mark_complete(0),
            ])
            .then_state(|state| {
                assert_eq!(
                    state.todos,
                    vec![item("b", true), item("a", true), item("c", true)]
                );
            })
            .run();
    }

    #[test]
    fn test_mark_complete_already_complete() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![item("a", false), item("b", true)]))
            .when_action(TodoAction::mark_complete(1))
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_mark_complete_out_of_range() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![item("a", false)]))
            .when_action(TodoAction::mark_complete(7))
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_mark_complete_does_not_touch_previous_snapshot() {
        let before = state_with(vec![item("a", false), item("b", false)]);

        let after = TodoReducer::new().reduce(&before, TodoAction::mark_complete(0));

        assert_eq!(before.todos, vec![item("a", false), item("b", false)]);
        assert_eq!(after.todos, vec![item("b", false), item("a", true)]);
    }

    #[test]
    fn test_favorite_todo_appends_snapshot() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState {
                todos: vec![item("a", false), item("b", true)],
                draft: String::new(),
                favorites: vec![item("a", false)],
            })
            .when_action(TodoAction::favorite_todo(1))
            .then_state(|state| {
                assert_eq!(state.favorites, vec![item("a", false), item("b", true)]);
                assert_eq!(state.count(), 2);
            })
            .run();
    }

    #[test]
    fn test_favorite_is_a_copy() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![item("a", false)]))
            .when_actions([
                TodoAction::favorite_todo(0),
                TodoAction::mark_complete(0),
                TodoAction::remove_todo(0),
            ])
            .then_state(|state| {
                assert!(state.todos.is_empty());
                assert_eq!(state.favorites, vec![item("a", false)]);
            })
            .run();
    }

    #[test]
    fn test_favorite_todo_out_of_range() {
        ReducerTest::new(TodoReducer::new())
            .given_state(state_with(vec![item("a", false)]))
            .when_action(TodoAction::favorite_todo(1))
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_favorite_todo_on_empty_list() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState::new())
            .when_action(TodoAction::favorite_todo(0))
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_remove_favorite() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState {
                favorites: vec![item("a", false), item("b", true), item("c", false)],
                ..TodoState::new()
            })
            .when_action(TodoAction::remove_favorite(1))
            .then_state(|state| {
                assert_eq!(state.favorites, vec![item("a", false), item("c", false)]);
            })
            .run();
    }

    #[test]
    fn test_remove_favorite_out_of_range() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState {
                todos: vec![item("a", false), item("b", false)],
                favorites: vec![item("a", false)],
                ..TodoState::new()
            })
            .when_action(TodoAction::remove_favorite(1))
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_completed_last_keeps_group_order() {
        let todos = vec![
            item("1", true),
            item("2", false),
            item("3", true),
            item("4", false),
        ];

        assert_eq!(
            completed_last(todos),
            vec![
                item("2", false),
                item("4", false),
                item("1", true),
                item("3", true),
            ]
        );
    }

    #[test]
    fn test_without() {
        let items = vec![item("a", false), item("b", false)];

        assert_eq!(without(&items, 0), Some(vec![item("b", false)]));
        assert_eq!(without(&items, 2), None);
        assert_eq!(without(&[], 0), None);
    }
}

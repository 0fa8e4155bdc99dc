//! # Tasklist Core
//!
//! Core traits for the Tasklist reducer architecture.
//!
//! This crate provides the abstractions every feature is built from:
//!
//! ## Core Concepts
//!
//! - **State**: Owned, cloneable domain state for a feature
//! - **Action**: A closed enum of everything that can happen to that state
//! - **Reducer**: Pure function `(&State, Action) → State`
//!
//! The Store that owns live state and notifies subscribers lives in
//! `tasklist-runtime`.
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Copy-on-write state: previous snapshots are never mutated
//!
//! ## Example
//!
//! ```
//! use tasklist_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &CounterState, action: CounterAction) -> CounterState {
//!         match action {
//!             CounterAction::Increment => CounterState { count: state.count + 1 },
//!             CounterAction::Reset => CounterState::default(),
//!         }
//!     }
//! }
//!
//! let before = CounterState::default();
//! let after = CounterReducer.reduce(&before, CounterAction::Increment);
//! assert_eq!(after.count, 1);
//! assert_eq!(before.count, 0);
//! assert_eq!(CounterReducer.reduce(&after, CounterAction::Reset), before);
//! ```

/// Action module - descriptive metadata for action enums
///
/// Actions are plain values describing "what happened". They carry no
/// behavior; the only thing the runtime needs from them is a stable name for
/// logs and metric labels.
pub mod action {
    /// Metadata every action type exposes to the runtime.
    ///
    /// Usually implemented with `#[derive(Action)]` from `tasklist-macros`.
    pub trait Action {
        /// Returns the variant name (e.g. `"AddTodo"`)
        fn action_type(&self) -> &'static str;

        /// Returns true if this action addresses an element by position
        ///
        /// Indexed actions are the ones that may degrade to a no-op when the
        /// position is out of range.
        fn is_indexed(&self) -> bool {
            false
        }
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(&State, Action) → State`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use std::marker::PhantomData;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Purity
    ///
    /// `reduce` receives the current state by shared reference and must return
    /// a new value. It performs no I/O and never mutates the state it was
    /// given, so every snapshot handed out by a Store stays valid forever.
    ///
    /// # Totality
    ///
    /// `reduce` is defined for every action. Requests that cannot be honored
    /// (for example an out-of-range index) return the input state unchanged
    /// instead of failing.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into the next state
        ///
        /// # Arguments
        ///
        /// - `state`: The current state (read-only)
        /// - `action`: The action to process
        ///
        /// # Returns
        ///
        /// The next state
        fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State;
    }

    /// A reducer backed by a plain function or closure.
    ///
    /// Handy for tests and for small features that do not warrant a named
    /// reducer type.
    ///
    /// ```
    /// use tasklist_core::reducer::{FnReducer, Reducer};
    ///
    /// let append = FnReducer::new(|state: &Vec<u8>, byte: u8| {
    ///     let mut next = state.clone();
    ///     next.push(byte);
    ///     next
    /// });
    ///
    /// assert_eq!(append.reduce(&vec![1], 2), vec![1, 2]);
    /// ```
    pub struct FnReducer<S, A, F> {
        f: F,
        _phantom: PhantomData<fn(&S, A) -> S>,
    }

    impl<S, A, F> FnReducer<S, A, F>
    where
        F: Fn(&S, A) -> S,
    {
        /// Wraps `f` as a reducer
        #[must_use]
        pub const fn new(f: F) -> Self {
            Self {
                f,
                _phantom: PhantomData,
            }
        }
    }

    impl<S, A, F> Clone for FnReducer<S, A, F>
    where
        F: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                f: self.f.clone(),
                _phantom: PhantomData,
            }
        }
    }

    impl<S, A, F> Reducer for FnReducer<S, A, F>
    where
        F: Fn(&S, A) -> S,
    {
        type State = S;
        type Action = A;

        fn reduce(&self, state: &S, action: A) -> S {
            (self.f)(state, action)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::action::Action;
    use super::reducer::{FnReducer, Reducer};
    use proptest::prelude::*;

    enum Op {
        Push(u32),
        Clear,
    }

    impl Action for Op {
        fn action_type(&self) -> &'static str {
            match self {
                Self::Push(_) => "Push",
                Self::Clear => "Clear",
            }
        }
    }

    fn list_reducer() -> impl Reducer<State = Vec<u32>, Action = Op> {
        FnReducer::new(|state: &Vec<u32>, op: Op| match op {
            Op::Push(value) => {
                let mut next = state.clone();
                next.push(value);
                next
            },
            Op::Clear => Vec::new(),
        })
    }

    #[test]
    fn fn_reducer_returns_new_state() {
        let reducer = list_reducer();
        let before = vec![1, 2];

        let after = reducer.reduce(&before, Op::Push(3));

        assert_eq!(after, vec![1, 2, 3]);
        assert_eq!(before, vec![1, 2]);
        assert!(reducer.reduce(&after, Op::Clear).is_empty());
    }

    #[test]
    fn action_defaults_to_not_indexed() {
        assert_eq!(Op::Push(1).action_type(), "Push");
        assert_eq!(Op::Clear.action_type(), "Clear");
        assert!(!Op::Clear.is_indexed());
    }

    proptest! {
        #[test]
        fn fn_reducer_is_deterministic(values in proptest::collection::vec(any::<u32>(), 0..32)) {
            let reducer = list_reducer();
            let first = values.iter().fold(Vec::new(), |s, v| reducer.reduce(&s, Op::Push(*v)));
            let second = values.iter().fold(Vec::new(), |s, v| reducer.reduce(&s, Op::Push(*v)));
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first, values);
        }
    }
}

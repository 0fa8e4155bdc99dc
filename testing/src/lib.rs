//! # Tasklist Testing
//!
//! Testing utilities and helpers for the Tasklist reducer architecture.
//!
//! This crate provides:
//! - A fluent Given-When-Then builder for reducers ([`ReducerTest`])
//! - A recording subscriber for store tests ([`StateRecorder`])
//! - Helpers for folding action sequences and installing test logging
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//! use tasklist_testing::StateRecorder;
//!
//! #[test]
//! fn test_todo_flow() {
//!     let store = Store::new(TodoState::default(), TodoReducer::new());
//!     let recorder = StateRecorder::new();
//!     store.subscribe(recorder.listener());
//!
//!     store.dispatch(TodoAction::add_todo("Buy milk"));
//!
//!     assert_eq!(recorder.len(), 1);
//!     assert_eq!(recorder.last().unwrap().count(), 1);
//! }
//! ```


pub use reducer_test::ReducerTest;

/// Mock implementations for testing.
pub mod mocks {
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Subscriber that records every state it is notified with
    ///
    /// Clones share the same recording, so one clone can be moved into the
    /// store while the test keeps another to inspect.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::StateRecorder;
    ///
    /// let recorder = StateRecorder::new();
    /// let listener = recorder.listener();
    ///
    /// listener(&1);
    /// listener(&2);
    ///
    /// assert_eq!(recorder.states(), vec![1, 2]);
    /// ```
    #[derive(Debug)]
    pub struct StateRecorder<S> {
        states: Arc<Mutex<Vec<S>>>,
    }

    impl<S> StateRecorder<S>
    where
        S: Clone + Send + 'static,
    {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self {
                states: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Returns a subscriber closure that appends to this recording
        #[must_use]
        pub fn listener(&self) -> impl Fn(&S) + Send + Sync + 'static {
            let states = Arc::clone(&self.states);
            move |state: &S| states.lock().push(state.clone())
        }

        /// Returns every recorded state, oldest first
        #[must_use]
        pub fn states(&self) -> Vec<S> {
            self.states.lock().clone()
        }

        /// Returns the most recently recorded state
        #[must_use]
        pub fn last(&self) -> Option<S> {
            self.states.lock().last().cloned()
        }

        /// Returns the number of notifications received
        #[must_use]
        pub fn len(&self) -> usize {
            self.states.lock().len()
        }

        /// Returns true if no notification was received
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.states.lock().is_empty()
        }

        /// Forget everything recorded so far
        pub fn clear(&self) {
            self.states.lock().clear();
        }
    }

    impl<S> Clone for StateRecorder<S> {
        fn clone(&self) -> Self {
            Self {
                states: Arc::clone(&self.states),
            }
        }
    }

    impl<S> Default for StateRecorder<S>
    where
        S: Clone + Send + 'static,
    {
        fn default() -> Self {
            Self::new()
        }
    }
}

/// Test helpers and utilities.
pub mod helpers {
    use std::sync::Once;
    use tasklist_core::reducer::Reducer;

    /// Apply `actions` in order starting from `state`, returning the final state
    ///
    /// ```
    /// use tasklist_core::reducer::FnReducer;
    /// use tasklist_testing::helpers::reduce_all;
    ///
    /// let sum = FnReducer::new(|state: &i32, n: i32| state + n);
    /// assert_eq!(reduce_all(&sum, 0, [1, 2, 3]), 6);
    /// ```
    pub fn reduce_all<R, S, A>(reducer: &R, state: S, actions: impl IntoIterator<Item = A>) -> S
    where
        R: Reducer<State = S, Action = A>,
    {
        actions
            .into_iter()
            .fold(state, |state, action| reducer.reduce(&state, action))
    }

    /// Install a `tracing` subscriber that writes through the test harness
    ///
    /// Safe to call from every test; only the first call installs anything.
    /// Verbosity follows `RUST_LOG`, defaulting to `debug`.
    pub fn init_test_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_test_writer()
                .try_init();
        });
    }
}

// Re-export commonly used items
pub use helpers::{init_test_tracing, reduce_all};
pub use mocks::StateRecorder;

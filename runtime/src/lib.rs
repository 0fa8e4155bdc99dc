//! # Tasklist Runtime
//!
//! Runtime implementation for the Tasklist reducer architecture.
//!
//! This crate provides the Store that owns live state, applies the reducer
//! to every dispatched action, and notifies subscribers.
//!
//! ## Core Components
//!
//! - **Store**: Owns the current state and serializes dispatches
//! - **Subscribers**: Synchronous listeners called with each new state
//! - **State watch**: A `tokio::sync::watch` channel for async consumers
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer);
//!
//! let id = store.subscribe(|state| println!("{state:?}"));
//!
//! // Dispatch an action (reducer + notifications run before this returns)
//! store.dispatch(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//!
//! store.unsubscribe(id)?;
//! ```

use tasklist_core::{action::Action, reducer::Reducer};

/// Metrics for observability
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use crate::store::SubscriptionId;
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Dispatching never fails; only subscription bookkeeping can.
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StoreError {
        /// The subscription is not registered with this store
        ///
        /// Returned by `unsubscribe` for an id that was never issued by this
        /// store or that has already been removed.
        #[error("Unknown subscription: {0}")]
        UnknownSubscription(SubscriptionId),
    }
}

/// Configuration for Store instances
pub mod config {
    /// Configuration for Store instances
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = StoreConfig::default()
    ///     .with_name("todos")
    ///     .with_publish_snapshots(false);
    ///
    /// let store = Store::with_config(state, reducer, config);
    /// ```
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct StoreConfig {
        /// Name used in tracing spans and as the `store` metric label
        pub name: String,
        /// Publish every applied state on the watch channel
        pub publish_snapshots: bool,
    }

    impl StoreConfig {
        /// Create a new configuration with custom values
        #[must_use]
        pub fn new(name: impl Into<String>, publish_snapshots: bool) -> Self {
            Self {
                name: name.into(),
                publish_snapshots,
            }
        }

        /// Set the store name
        #[must_use]
        pub fn with_name(mut self, name: impl Into<String>) -> Self {
            self.name = name.into();
            self
        }

        /// Enable or disable publishing on the watch channel
        #[must_use]
        pub const fn with_publish_snapshots(mut self, publish: bool) -> Self {
            self.publish_snapshots = publish;
            self
        }
    }

    impl Default for StoreConfig {
        fn default() -> Self {
            Self {
                name: "store".to_string(),
                publish_snapshots: true,
            }
        }
    }
}

pub use config::StoreConfig;
pub use error::StoreError;
pub use store::{Listener, Store, SubscriptionId};

/// The Store and its subscription types
pub mod store {
    use super::{Action, Reducer, StoreConfig, StoreError};
    use crate::metrics::StoreMetrics;
    use parking_lot::{Mutex, ReentrantMutex, RwLock};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Instant;
    use tokio::sync::watch;

    /// A subscriber callback, invoked with every new state
    pub type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

    /// Token returned by [`Store::subscribe`], used to unsubscribe
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct SubscriptionId(u64);

    impl SubscriptionId {
        /// Returns the raw id
        #[must_use]
        pub const fn as_u64(self) -> u64 {
            self.0
        }
    }

    impl std::fmt::Display for SubscriptionId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "sub-{}", self.0)
        }
    }

    /// Actions waiting to be applied, in submission order
    struct DispatchQueue<A> {
        pending: VecDeque<A>,
        draining: bool,
    }

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (an `Arc` snapshot behind a `RwLock`, replaced once per action)
    /// 2. Reducer (business logic)
    /// 3. Subscribers (called synchronously after every applied action)
    /// 4. A watch channel carrying the latest state for async consumers
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `R`: Reducer implementation
    ///
    /// # Concurrency
    ///
    /// Dispatches are serialized behind a single re-entrant lock guarding a
    /// FIFO queue. A dispatch from another thread blocks until the current one
    /// (including its notifications) has finished. A dispatch made from inside
    /// a subscriber on the dispatching thread is queued and applied after the
    /// current notification round, before the outermost `dispatch` returns.
    ///
    /// Share a store between threads with `Arc<Store<..>>`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(TodoState::default(), TodoReducer::new());
    ///
    /// store.dispatch(TodoAction::add_todo("Buy milk"));
    /// assert_eq!(store.state(|s| s.count()), 1);
    /// ```
    pub struct Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        state: RwLock<Arc<S>>,
        reducer: R,
        config: StoreConfig,
        metrics: StoreMetrics,
        queue: ReentrantMutex<RefCell<DispatchQueue<A>>>,
        listeners: Mutex<Vec<(SubscriptionId, Listener<S>)>>,
        next_subscription: AtomicU64,
        /// Latest applied state for async observers.
        snapshots: watch::Sender<Arc<S>>,
    }

    impl<S, A, R> Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
        A: Action,
    {
        /// Create a new store with initial state and reducer
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R) -> Self {
            Self::with_config(initial_state, reducer, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// # Arguments
        ///
        /// - `initial_state`: Initial state value
        /// - `reducer`: The reducer implementation (business logic)
        /// - `config`: Store name and snapshot publishing
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, config: StoreConfig) -> Self {
            let initial = Arc::new(initial_state);
            let (snapshots, _) = watch::channel(Arc::clone(&initial));

            Self {
                state: RwLock::new(initial),
                reducer,
                metrics: StoreMetrics::new(config.name.clone()),
                config,
                queue: ReentrantMutex::new(RefCell::new(DispatchQueue {
                    pending: VecDeque::new(),
                    draining: false,
                })),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
                snapshots,
            }
        }

        /// Returns the store configuration
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Dispatch an action to the store
        ///
        /// 1. Calls the reducer with (current state, action)
        /// 2. Replaces the live state with the result
        /// 3. Publishes the new state on the watch channel
        /// 4. Calls every subscriber registered at that moment
        ///
        /// All of this completes before `dispatch` returns. Dispatching cannot
        /// fail: reducers are total.
        ///
        /// # Panics
        ///
        /// If the reducer or a subscriber panics, the panic propagates to the
        /// caller. Actions still queued at that point stay queued and are
        /// applied by the next dispatch.
        pub fn dispatch(&self, action: A) {
            let queue = self.queue.lock();
            {
                let mut pending = queue.borrow_mut();
                pending.pending.push_back(action);
                if pending.draining {
                    tracing::trace!(
                        store = %self.config.name,
                        queued = pending.pending.len(),
                        "Nested dispatch queued"
                    );
                    self.metrics.record_nested();
                    return;
                }
                pending.draining = true;
            }

            let _drain = scopeguard::guard((), |()| queue.borrow_mut().draining = false);

            loop {
                let next = queue.borrow_mut().pending.pop_front();
                let Some(action) = next else {
                    break;
                };
                self.apply(action);
            }
        }

        /// Apply a single action: reduce, replace, publish, notify
        fn apply(&self, action: A) {
            let action_type = action.action_type();
            let span = tracing::debug_span!(
                "store_dispatch",
                store = %self.config.name,
                action = action_type,
                indexed = action.is_indexed()
            );
            let _enter = span.enter();

            let current = self.snapshot();

            let start = Instant::now();
            let next = Arc::new(self.reducer.reduce(&current, action));
            self.metrics.record_dispatch(action_type, start.elapsed());

            *self.state.write() = Arc::clone(&next);
            tracing::trace!("State replaced");

            if self.config.publish_snapshots {
                self.snapshots.send_replace(Arc::clone(&next));
            }

            // Snapshot the subscriber list so listeners may (un)subscribe freely
            let listeners: Vec<Listener<S>> = self
                .listeners
                .lock()
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();

            tracing::debug!(subscribers = listeners.len(), "Action applied");

            for listener in &listeners {
                listener(next.as_ref());
            }
        }

        /// Returns the current state
        ///
        /// The returned snapshot is immutable; later dispatches replace the
        /// store's state without touching it.
        #[must_use]
        pub fn snapshot(&self) -> Arc<S> {
            Arc::clone(&self.state.read())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let todo_count = store.state(|s| s.todos.len());
        /// ```
        ///
        /// The closure runs against a snapshot, so it may dispatch without
        /// deadlocking.
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let snapshot = self.snapshot();
            f(&snapshot)
        }

        /// Register a subscriber, called with the new state after every dispatch
        ///
        /// A subscriber registered while a notification round is running is
        /// first called on the next dispatch.
        pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
        where
            F: Fn(&S) + Send + Sync + 'static,
        {
            let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));

            let count = {
                let mut listeners = self.listeners.lock();
                listeners.push((id, Arc::new(listener)));
                listeners.len()
            };

            self.metrics.record_subscribers(count);
            tracing::debug!(store = %self.config.name, subscription = %id, subscribers = count, "Subscriber registered");

            id
        }

        /// Remove a subscriber
        ///
        /// A subscriber removed while a notification round is running still
        /// receives that round's notification.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::UnknownSubscription`] if `id` is not
        /// registered with this store.
        pub fn unsubscribe(&self, id: SubscriptionId) -> Result<(), StoreError> {
            let (removed, count) = {
                let mut listeners = self.listeners.lock();
                let Some(position) = listeners.iter().position(|(existing, _)| *existing == id)
                else {
                    tracing::warn!(store = %self.config.name, subscription = %id, "Unsubscribe for unknown subscription");
                    return Err(StoreError::UnknownSubscription(id));
                };
                let removed = listeners.remove(position);
                (removed, listeners.len())
            };
            // Dropped outside the lock: a listener's captures may touch the store
            drop(removed);

            self.metrics.record_subscribers(count);
            tracing::debug!(store = %self.config.name, subscription = %id, subscribers = count, "Subscriber removed");

            Ok(())
        }

        /// Returns the number of registered subscribers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.listeners.lock().len()
        }

        /// Watch the latest state from async code
        ///
        /// The receiver always holds the most recently applied state
        /// (intermediate states may be skipped by slow readers). Nothing is
        /// published when `publish_snapshots` is disabled in the config.
        ///
        /// # Example
        ///
        /// ```ignore
        /// let mut rx = store.watch_state();
        ///
        /// while rx.changed().await.is_ok() {
        ///     let state = rx.borrow_and_update().clone();
        ///     render(&state);
        /// }
        /// ```
        #[must_use]
        pub fn watch_state(&self) -> watch::Receiver<Arc<S>> {
            self.snapshots.subscribe()
        }
    }

    impl<S, A, R> std::fmt::Debug for Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("name", &self.config.name)
                .field("subscribers", &self.listeners.lock().len())
                .finish_non_exhaustive()
        }
    }
}

//! # Shopping List Runtime
//!
//! The Store runtime that owns state, coordinates reducer execution and
//! executes effects.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect Executor**: Runs effect descriptions and feeds produced actions back to the reducer
//!
//! Every `send` runs to completion: the action, and any action its effects
//! produce, are reduced before `send` returns. Callers re-render right after.
//!
//! ## Example
//!
//! ```ignore
//! use shopping_list_runtime::Store;
//!
//! let store = Store::new(ListState::default(), ListReducer::new(), env);
//!
//! store.send(ListAction::AddItem { name: "eggs".into() }).await?;
//! let count = store.state(|s| s.items.len()).await;
//! ```

use shopping_list_core::{effect::Effect, reducer::Reducer};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// Returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Effects kept feeding actions back past the configured limit
        ///
        /// Actions reduced before the limit was hit stay applied.
        #[error("Feedback loop exceeded {0} actions")]
        FeedbackLimit(usize),
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use shopping_list_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Upper bound on actions reduced by a single `send`, the initial one included
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Set the feedback action bound
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, max: usize) -> Self {
        self.max_feedback_actions = max;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
        }
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Arc, AtomicBool, Effect, Ordering, Reducer, RwLock, StoreConfig, StoreError, VecDeque};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; only one action is reduced at a time)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// Clones share the same state.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        shutdown: Arc<AtomicBool>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Send + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                config,
                shutdown: Arc::new(AtomicBool::new(false)),
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Releases the lock and executes the returned effects in order
        /// 4. Reduces every action the effects produce, until none are left
        ///
        /// Returns the number of actions reduced, the initial one included.
        ///
        /// # Errors
        ///
        /// - [`StoreError::ShutdownInProgress`] if the store is shutting down.
        /// - [`StoreError::FeedbackLimit`] if effects produced more actions than
        ///   [`StoreConfig::max_feedback_actions`] allows.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<usize, StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.actions.rejected_shutdown").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            let mut queue = VecDeque::from([action]);
            let mut processed = 0;

            while let Some(action) = queue.pop_front() {
                if processed == self.config.max_feedback_actions {
                    tracing::error!(
                        limit = self.config.max_feedback_actions,
                        "Feedback loop limit reached, dropping remaining actions"
                    );
                    return Err(StoreError::FeedbackLimit(self.config.max_feedback_actions));
                }
                processed += 1;
                metrics::counter!("store.actions.total").increment(1);

                let effects = {
                    let mut state = self.state.write().await;
                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();
                    self.reducer.reduce(&mut *state, action, &self.environment)
                };

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                for effect in effects {
                    Self::execute_effect(effect, &mut queue).await;
                }
            }

            tracing::debug!(processed, "Action processing completed");
            Ok(processed)
        }

        /// Run one effect to completion, queueing any action it produces
        async fn execute_effect(effect: Effect<A>, queue: &mut VecDeque<A>) {
            let mut pending = VecDeque::from([effect]);
            while let Some(effect) = pending.pop_front() {
                match effect {
                    Effect::None => {},
                    Effect::Sequential(effects) => {
                        for (index, effect) in effects.into_iter().enumerate() {
                            pending.insert(index, effect);
                        }
                    },
                    Effect::Future(future) => {
                        if let Some(action) = future.await {
                            tracing::trace!("Effect::Future produced an action, feeding it back");
                            queue.push_back(action);
                        }
                    },
                }
            }
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let visible = store.state(|s| s.visible_items().len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Stop accepting actions
        ///
        /// Every later `send` returns [`StoreError::ShutdownInProgress`]. State
        /// stays readable.
        pub fn shutdown(&self) {
            tracing::info!("Store shutting down");
            self.shutdown.store(true, Ordering::Release);
        }

        /// Whether [`Store::shutdown`] has been called on this store or a clone
        #[must_use]
        pub fn is_shutdown(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                config: self.config.clone(),
                shutdown: Arc::clone(&self.shutdown),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;

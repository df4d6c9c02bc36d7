//! # Shopping List Core
//!
//! Core traits and types for the shopping list reducer architecture.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (the item list and its filters)
//! - **Action**: Every input a reducer understands (user intents)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//! - **View**: Read-only projection of state into a rendering
//!
//! ## Example
//!
//! ```
//! use shopping_list_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Flags {
//!     hide_completed: bool,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum FlagAction {
//!     ToggleHideCompleted,
//! }
//!
//! struct FlagReducer;
//!
//! impl Reducer for FlagReducer {
//!     type State = Flags;
//!     type Action = FlagAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Flags,
//!         action: FlagAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<FlagAction>; 4]> {
//!         match action {
//!             FlagAction::ToggleHideCompleted => state.hide_completed = !state.hide_completed,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut flags = Flags::default();
//! FlagReducer.reduce(&mut flags, FlagAction::ToggleHideCompleted, &());
//! assert!(flags.hide_completed);
//! ```

// Re-export commonly used types
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// An action that fails validation must leave the domain data
        /// untouched; reducers never panic on bad input.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values returned by reducers and executed by the store
/// runtime. They never run inside the reducer.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects one after another, in order
        Sequential(Vec<Effect<Action>>),

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Wrap an already-known action as an effect that feeds it back
        #[must_use]
        pub fn send(action: Action) -> Effect<Action>
        where
            Action: Send + 'static,
        {
            Effect::Future(Box::pin(async move { Some(action) }))
        }

        /// Returns `true` for `Effect::None` and for sequences made only of no-ops
        #[must_use]
        pub fn is_noop(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Sequential(effects) => effects.iter().all(Effect::is_noop),
                Effect::Future(_) => false,
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use uuid::Uuid;

    /// Source of fresh identifiers for newly created entities
    ///
    /// Implementations must never hand out the same value twice during the
    /// lifetime of a store. No ordering between values is required.
    ///
    /// # Examples
    ///
    /// ```
    /// use shopping_list_core::environment::{IdGenerator, UuidGenerator};
    ///
    /// let ids = UuidGenerator;
    /// assert_ne!(ids.next_id(), ids.next_id());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Allocate the next identifier
        fn next_id(&self) -> Uuid;
    }

    /// Random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}

/// View module - Read-only projections of state
pub mod view {
    /// Turns a state snapshot into a rendering
    ///
    /// Views only read state. The store runtime never calls them; the
    /// caller re-renders after each action it sends.
    pub trait View {
        /// State this view reads
        type State;

        /// Rendering produced, usually a `String`
        type Output;

        /// Render the whole state
        fn render(&self, state: &Self::State) -> Self::Output;
    }
}

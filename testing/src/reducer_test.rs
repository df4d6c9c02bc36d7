//! Given-When-Then testing for reducers
//!
//! Reducers run directly, without a store, so effects are returned for
//! inspection instead of being executed.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use shopping_list_core::{effect::Effect, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// # Example
///
/// ```ignore
/// ReducerTest::new(ListReducer::new())
///     .with_env(test_environment())
///     .given_state(ListState::default())
///     .when_action(ListAction::AddItem { name: "eggs".into() })
///     .then_state(|state| {
///         assert_eq!(state.items.len(), 1);
///     })
///     .then_effects(assertions::assert_no_effects)
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    actions: Vec<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Add an action to reduce (When)
    ///
    /// May be called repeatedly; actions are reduced in the order given.
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Add several actions to reduce, in order (When)
    #[must_use]
    pub fn when_actions(mut self, actions: impl IntoIterator<Item = A>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the effects returned by every reduced action (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, actions, or environment are not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        assert!(
            !self.actions.is_empty(),
            "At least one action must be set with when_action()"
        );

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        let mut effects = Vec::new();
        for action in self.actions {
            effects.extend(self.reducer.reduce(&mut state, action, &env));
        }

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use shopping_list_core::effect::Effect;

    /// Assert that every effect is a no-op
    ///
    /// # Panics
    ///
    /// Panics if any effect does something.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().all(Effect::is_noop),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that effects contain at least one Future effect
    ///
    /// # Panics
    ///
    /// Panics if no Future effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_future_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Future(_))),
            "Expected at least one Future effect, but none found"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopping_list_core::{SmallVec, smallvec};

    #[derive(Clone, Debug, Default)]
    struct Basket {
        names: Vec<String>,
    }

    #[derive(Clone, Debug)]
    enum BasketAction {
        Put(String),
        TakeLast,
        Announce,
    }

    struct BasketReducer;

    impl Reducer for BasketReducer {
        type State = Basket;
        type Action = BasketAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                BasketAction::Put(name) => {
                    state.names.push(name);
                    smallvec![Effect::None]
                },
                BasketAction::TakeLast => {
                    state.names.pop();
                    smallvec![Effect::None]
                },
                BasketAction::Announce => smallvec![Effect::send(BasketAction::TakeLast)],
            }
        }
    }

    #[test]
    fn test_single_action() {
        ReducerTest::new(BasketReducer)
            .with_env(())
            .given_state(Basket::default())
            .when_action(BasketAction::Put("apples".to_string()))
            .then_state(|state| {
                assert_eq!(state.names, vec!["apples".to_string()]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_actions_reduce_in_order() {
        ReducerTest::new(BasketReducer)
            .with_env(())
            .given_state(Basket::default())
            .when_actions([
                BasketAction::Put("apples".to_string()),
                BasketAction::Put("milk".to_string()),
                BasketAction::TakeLast,
            ])
            .then_state(|state| {
                assert_eq!(state.names, vec!["apples".to_string()]);
            })
            .then_effects(|effects| assertions::assert_effects_count(effects, 3))
            .run();
    }

    #[test]
    fn test_effects_are_returned_not_run() {
        ReducerTest::new(BasketReducer)
            .with_env(())
            .given_state(Basket {
                names: vec!["bread".to_string()],
            })
            .when_action(BasketAction::Announce)
            .then_state(|state| assert_eq!(state.names.len(), 1))
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<BasketAction>(&[Effect::None]);
        assertions::assert_no_effects::<BasketAction>(&[]);
        assertions::assert_no_effects::<BasketAction>(&[Effect::chain(vec![Effect::None])]);
    }
}

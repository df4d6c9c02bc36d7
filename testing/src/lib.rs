//! # Shopping List Testing
//!
//! Testing utilities and helpers for the shopping list reducer architecture.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//! - `proptest` strategies for list content
//!
//! ## Example
//!
//! ```ignore
//! use shopping_list_testing::{ReducerTest, SequentialIdGenerator};
//!
//! ReducerTest::new(ListReducer::new())
//!     .with_env(ListEnvironment::new(Arc::new(SequentialIdGenerator::new())))
//!     .given_state(ListState::default())
//!     .when_action(ListAction::AddItem { name: "eggs".into() })
//!     .then_state(|state| assert_eq!(state.items.len(), 1))
//!     .run();
//! ```

use shopping_list_core::environment::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{AtomicU64, IdGenerator, Ordering, Uuid};

    /// Id generator handing out `1, 2, 3, …` encoded as UUIDs
    ///
    /// Makes ids predictable, so tests can refer to an item before it exists.
    ///
    /// # Example
    ///
    /// ```
    /// use shopping_list_testing::mocks::SequentialIdGenerator;
    /// use shopping_list_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.peek(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Start at id 1
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_after(0)
        }

        /// Start right after `issued`, e.g. to skip ids already used by a fixture
        #[must_use]
        pub const fn starting_after(issued: u64) -> Self {
            Self {
                issued: AtomicU64::new(issued),
            }
        }

        /// The id the next call to `next_id` will return
        #[must_use]
        pub fn peek(&self) -> Uuid {
            Uuid::from_u128(u128::from(self.issued.load(Ordering::SeqCst) + 1))
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }
}

/// Property-based testing utilities using proptest
pub mod properties {
    use proptest::prelude::*;

    /// Short lowercase item names, including the empty name
    pub fn item_name() -> impl Strategy<Value = String> {
        "[a-z]{0,8}"
    }

    /// Non-empty item names
    pub fn non_empty_item_name() -> impl Strategy<Value = String> {
        "[a-z]{1,8}"
    }

    /// Search input as typed: absent, empty, or a short fragment
    pub fn search_term() -> impl Strategy<Value = Option<String>> {
        prop_oneof![Just(None), Just(Some(String::new())), "[a-z]{1,3}".prop_map(Some),]
    }

    /// A list of `(name, checked)` pairs to seed a state with
    pub fn item_specs(max_len: usize) -> impl Strategy<Value = Vec<(String, bool)>> {
        prop::collection::vec((non_empty_item_name(), any::<bool>()), 0..=max_len)
    }
}

// Re-export commonly used items
pub use mocks::SequentialIdGenerator;

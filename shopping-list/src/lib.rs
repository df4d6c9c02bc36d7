//! A checkable shopping list with filtering, search and in-place editing.
//!
//! The list is a reducer over [`ListState`]: every user interaction becomes a
//! [`ListAction`], the [`ListReducer`] applies it, and a view renders the
//! visible items again from scratch.
//!
//! - Add, check/uncheck, delete and rename items
//! - Hide checked items
//! - Case-sensitive substring search
//! - Render as markup, plain text or JSON
//!
//! # Quick Start
//!
//! ```no_run
//! use shopping_list::{ListEnvironment, ListState, RenderFormat, ShoppingList, UiEvent};
//! use shopping_list_core::environment::UuidGenerator;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ids = Arc::new(UuidGenerator);
//! let list = ShoppingList::new(
//!     ListState::sample(ids.as_ref()),
//!     ListEnvironment::new(ids),
//!     RenderFormat::Html,
//! );
//!
//! let html = list.dispatch(UiEvent::SubmitNewItem("eggs".to_string())).await?;
//! println!("{html}");
//!
//! let html = list.dispatch(UiEvent::ClickHideToggle).await?;
//! println!("{html}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod events;
pub mod filter;
pub mod reducer;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use events::{Command, ItemRef, ListStore, ParseEventError, ShoppingList, UiEvent};
pub use reducer::{ListEnvironment, ListReducer};
pub use render::{HtmlView, JsonView, RenderFormat, TextView};
pub use types::{Item, ItemId, ListAction, ListState, Rejection};

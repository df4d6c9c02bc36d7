//! Event wiring: user interactions in, fresh rendering out.
//!
//! A [`UiEvent`] names the interaction the way the user performed it,
//! pointing at an item by id or by its row on screen. [`ShoppingList`]
//! resolves that reference against the current view, sends the matching
//! [`ListAction`] to the store and re-renders the whole list.

use crate::reducer::{ListEnvironment, ListReducer};
use crate::render::RenderFormat;
use crate::types::{ItemId, ListAction, ListState};
use shopping_list_core::view::View;
use shopping_list_runtime::{Store, StoreError};
use std::str::FromStr;
use thiserror::Error;

/// The store type behind a shopping list
pub type ListStore = Store<ListState, ListAction, ListEnvironment, ListReducer>;

/// How an interaction points at an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef {
    /// By id
    Id(ItemId),
    /// By 1-based position among the currently visible rows
    Row(usize),
}

impl FromStr for ItemRef {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(row) = s.trim_start_matches('#').parse::<usize>() {
            return Ok(Self::Row(row));
        }
        s.parse::<ItemId>()
            .map(Self::Id)
            .map_err(|_| ParseEventError::BadItemRef(s.to_string()))
    }
}

/// A user interaction with the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// New-item form submitted
    SubmitNewItem(String),
    /// Check button clicked
    ClickToggle(ItemRef),
    /// Delete button clicked
    ClickDelete(ItemRef),
    /// Edit button clicked
    ClickEdit(ItemRef),
    /// Edit form submitted
    SubmitEdit(ItemRef, String),
    /// Hide-completed checkbox clicked
    ClickHideToggle,
    /// Key released in the search box, carrying the whole box content
    KeyupSearch(String),
}

/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward an interaction to the list
    Event(UiEvent),
    /// Render again without changing anything
    Show,
    /// Print usage
    Help,
    /// Leave
    Quit,
}

/// Input line that is not a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEventError {
    /// First word is not a known command
    #[error("unknown command {0:?}, type `help` for a list")]
    UnknownCommand(String),

    /// Command needs an argument that is not there
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command as typed
        command: &'static str,
        /// What is missing
        argument: &'static str,
    },

    /// Neither a row number nor an item id
    #[error("{0:?} is neither a row number nor an item id")]
    BadItemRef(String),
}

/// Usage text for [`Command::Help`]
pub const HELP: &str = "\
commands:
  add <name>            add an item
  toggle <ref>          check or uncheck an item
  delete <ref>          remove an item
  edit <ref>            open an item for renaming
  commit <ref> <name>   rename an item being edited
  hide                  show or hide checked items
  search [text]         show only names containing text, empty to clear
  show                  render the list again
  help                  this text
  quit                  leave
<ref> is a row number from the current list or a full item id
";

fn item_ref(command: &'static str, rest: Option<&str>) -> Result<ItemRef, ParseEventError> {
    match rest.map(str::trim) {
        Some(arg) if !arg.is_empty() => arg.parse(),
        _ => Err(ParseEventError::MissingArgument {
            command,
            argument: "an item row or id",
        }),
    }
}

impl FromStr for Command {
    type Err = ParseEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.trim_start().split_once(' ') {
            Some((word, rest)) => (word, Some(rest)),
            None => (line.trim(), None),
        };

        let event = match word.to_lowercase().as_str() {
            "" | "show" => return Ok(Self::Show),
            "help" | "?" => return Ok(Self::Help),
            "quit" | "exit" => return Ok(Self::Quit),
            "add" => UiEvent::SubmitNewItem(rest.unwrap_or_default().to_string()),
            "toggle" => UiEvent::ClickToggle(item_ref("toggle", rest)?),
            "delete" => UiEvent::ClickDelete(item_ref("delete", rest)?),
            "edit" => UiEvent::ClickEdit(item_ref("edit", rest)?),
            "commit" => {
                let (target, name) = rest
                    .map(str::trim_start)
                    .and_then(|rest| rest.split_once(' '))
                    .ok_or(ParseEventError::MissingArgument {
                        command: "commit",
                        argument: "an item and a new name",
                    })?;
                UiEvent::SubmitEdit(item_ref("commit", Some(target))?, name.to_string())
            },
            "hide" => UiEvent::ClickHideToggle,
            "search" => UiEvent::KeyupSearch(rest.unwrap_or_default().to_string()),
            other => return Err(ParseEventError::UnknownCommand(other.to_string())),
        };
        Ok(Self::Event(event))
    }
}

/// A shopping list wired to a view
///
/// Every [`dispatch`](Self::dispatch) is one full cycle: resolve, mutate,
/// re-render.
pub struct ShoppingList<V = RenderFormat> {
    store: ListStore,
    view: V,
}

impl<V> ShoppingList<V>
where
    V: View<State = ListState, Output = String>,
{
    /// Wire a fresh store holding `state` to `view`
    #[must_use]
    pub fn new(state: ListState, env: ListEnvironment, view: V) -> Self {
        Self::with_store(Store::new(state, ListReducer::new(), env), view)
    }

    /// Wire an existing store to `view`
    #[must_use]
    pub const fn with_store(store: ListStore, view: V) -> Self {
        Self { store, view }
    }

    /// The store behind the list
    #[must_use]
    pub const fn store(&self) -> &ListStore {
        &self.store
    }

    /// Render the current state
    pub async fn render(&self) -> String {
        self.store.state(|state| self.view.render(state)).await
    }

    /// Handle one interaction and return the new rendering
    ///
    /// A reference that matches no visible row is ignored; the list is
    /// rendered again all the same.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store no longer accepts actions.
    pub async fn dispatch(&self, event: UiEvent) -> Result<String, StoreError> {
        tracing::debug!(?event, "Dispatching UI event");
        match self.to_action(event).await {
            Some(action) => {
                self.store.send(action).await?;
            },
            None => tracing::warn!("Event refers to no visible row, ignoring"),
        }
        Ok(self.render().await)
    }

    async fn resolve(&self, item: ItemRef) -> Option<ItemId> {
        match item {
            ItemRef::Id(id) => Some(id),
            ItemRef::Row(row) => {
                self.store
                    .state(|state| {
                        row.checked_sub(1)
                            .and_then(|index| state.visible_items().get(index).map(|item| item.id))
                    })
                    .await
            },
        }
    }

    async fn to_action(&self, event: UiEvent) -> Option<ListAction> {
        let action = match event {
            UiEvent::SubmitNewItem(name) => ListAction::AddItem { name },
            UiEvent::ClickToggle(item) => ListAction::ToggleChecked {
                id: self.resolve(item).await?,
            },
            UiEvent::ClickDelete(item) => ListAction::DeleteItem {
                id: self.resolve(item).await?,
            },
            UiEvent::ClickEdit(item) => ListAction::BeginEdit {
                id: self.resolve(item).await?,
            },
            UiEvent::SubmitEdit(item, name) => ListAction::CommitEdit {
                id: self.resolve(item).await?,
                name,
            },
            UiEvent::ClickHideToggle => ListAction::ToggleHideCompleted,
            UiEvent::KeyupSearch(term) => ListAction::SetSearchTerm { term: Some(term) },
        };
        Some(action)
    }
}

//! Domain types for the shopping list.
//!
//! A shopping list is an ordered collection of checkable items plus two
//! display filters. Items are addressed by an id that never changes and is
//! never reused while the list lives.

use serde::{Deserialize, Serialize};
use shopping_list_core::environment::IdGenerator;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a list item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Allocates a fresh id from the given generator
    #[must_use]
    pub fn generate(ids: &dyn IdGenerator) -> Self {
        Self(ids.next_id())
    }

    /// Creates an `ItemId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Last eight hex digits, enough to tell items apart on screen
    #[must_use]
    pub fn short(&self) -> String {
        let hex = self.0.simple().to_string();
        hex[hex.len() - 8..].to_string()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single shopping list entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, fixed at creation
    pub id: ItemId,
    /// What to buy
    pub name: String,
    /// Whether the item has been picked up
    pub checked: bool,
    /// Whether the item is shown as an edit form
    pub is_editing: bool,
}

impl Item {
    /// Creates an unchecked item that is not being edited
    #[must_use]
    pub const fn new(id: ItemId, name: String) -> Self {
        Self {
            id,
            name,
            checked: false,
            is_editing: false,
        }
    }

    /// Same item, checked
    #[must_use]
    pub const fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// Why an action left the list unchanged
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Add or rename with a blank name
    #[error("item name cannot be empty")]
    EmptyName,

    /// No item carries this id
    #[error("no item with id {0}")]
    UnknownItem(ItemId),

    /// Toggle or delete on an item that is being edited
    #[error("item {0} is being edited")]
    ItemBusy(ItemId),

    /// Commit on an item that is not being edited
    #[error("item {0} is not being edited")]
    NotEditing(ItemId),
}

/// State of the shopping list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    /// All items, in insertion order
    pub items: Vec<Item>,
    /// Hide items that are checked
    pub hide_completed: bool,
    /// Only show items whose name contains this text
    pub search_term: Option<String>,
    /// Why the last action was ignored, cleared by the next accepted one
    pub last_error: Option<Rejection>,
}

impl ListState {
    /// Creates an empty list with no filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding the given items, no filters
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// The starter list: apples, oranges, milk (already checked), bread
    #[must_use]
    pub fn sample(ids: &dyn IdGenerator) -> Self {
        Self::with_items(vec![
            Item::new(ItemId::generate(ids), "apples".to_string()),
            Item::new(ItemId::generate(ids), "oranges".to_string()),
            Item::new(ItemId::generate(ids), "milk".to_string()).checked(),
            Item::new(ItemId::generate(ids), "bread".to_string()),
        ])
    }

    /// Returns the number of items, filtered or not
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of checked items
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Returns an item by ID
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Returns a mutable item by ID
    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == *id)
    }

    /// Checks if an item exists
    #[must_use]
    pub fn exists(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }
}

/// Every change the list understands
///
/// Each variant is one user intent. Invalid intents (unknown id, blank
/// name, wrong edit phase) are reduced to a no-op and recorded in
/// [`ListState::last_error`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListAction {
    /// Append a new unchecked item
    AddItem {
        /// Name of the new item
        name: String,
    },

    /// Flip the checked flag
    ToggleChecked {
        /// Item to toggle
        id: ItemId,
    },

    /// Remove an item
    DeleteItem {
        /// Item to remove
        id: ItemId,
    },

    /// Switch an item to its edit form
    BeginEdit {
        /// Item to edit
        id: ItemId,
    },

    /// Rename an item and leave its edit form
    CommitEdit {
        /// Item being edited
        id: ItemId,
        /// Submitted name
        name: String,
    },

    /// Show or hide checked items
    ToggleHideCompleted,

    /// Replace the search text
    SetSearchTerm {
        /// Text typed so far, `None` or empty to clear
        term: Option<String>,
    },
}

impl ListAction {
    /// The item this action targets, if any
    #[must_use]
    pub const fn target(&self) -> Option<&ItemId> {
        match self {
            Self::ToggleChecked { id }
            | Self::DeleteItem { id }
            | Self::BeginEdit { id }
            | Self::CommitEdit { id, .. } => Some(id),
            Self::AddItem { .. } | Self::ToggleHideCompleted | Self::SetSearchTerm { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopping_list_testing::SequentialIdGenerator;

    #[test]
    fn item_id_round_trips_through_display() {
        let id = ItemId::from_uuid(Uuid::from_u128(42));
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn item_id_short_form() {
        let id = ItemId::from_uuid(Uuid::from_u128(7));
        assert_eq!(id.short(), "00000007");
        let id: ItemId = "12345678-9abc-def0-1234-56789abcdef0".parse().unwrap();
        assert_eq!(id.short(), "9abcdef0");
    }

    #[test]
    fn item_new_is_unchecked_and_not_editing() {
        let item = Item::new(ItemId::from_uuid(Uuid::from_u128(1)), "eggs".to_string());
        assert!(!item.checked);
        assert!(!item.is_editing);
    }

    #[test]
    fn sample_list_matches_starter_items() {
        let state = ListState::sample(&SequentialIdGenerator::new());
        let names: Vec<_> = state.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["apples", "oranges", "milk", "bread"]);
        assert_eq!(state.checked_count(), 1);
        assert!(state.items[2].checked);
        assert!(!state.hide_completed);
        assert_eq!(state.search_term, None);
    }

    #[test]
    fn lookup_by_id() {
        let state = ListState::sample(&SequentialIdGenerator::new());
        let milk = ItemId::from_uuid(Uuid::from_u128(3));
        assert_eq!(state.get(&milk).map(|i| i.name.as_str()), Some("milk"));
        assert!(!state.exists(&ItemId::from_uuid(Uuid::from_u128(99))));
    }

    #[test]
    fn item_serializes_with_camel_case_fields() {
        let item = Item::new(ItemId::from_uuid(Uuid::from_u128(1)), "eggs".to_string());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["isEditing"], false);
        assert_eq!(json["name"], "eggs");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn action_target() {
        let id = ItemId::from_uuid(Uuid::from_u128(1));
        assert_eq!(ListAction::DeleteItem { id }.target(), Some(&id));
        assert_eq!(ListAction::ToggleHideCompleted.target(), None);
    }
}

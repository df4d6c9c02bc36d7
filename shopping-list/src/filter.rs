//! The read-only filter pipeline: which items are on screen, in which order.

use crate::types::{Item, ListState};

impl ListState {
    /// The search text, if it would filter anything
    #[must_use]
    pub fn active_search(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }

    /// Whether both display filters let this item through
    ///
    /// Search is a case-sensitive substring match on the name.
    #[must_use]
    pub fn is_visible(&self, item: &Item) -> bool {
        if self.hide_completed && item.checked {
            return false;
        }
        self.active_search().is_none_or(|term| item.name.contains(term))
    }

    /// Items to display, in insertion order
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| self.is_visible(item)).collect()
    }

    /// Whether either filter is currently narrowing the list
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.hide_completed || self.active_search().is_some()
    }
}

//! Reducer logic for the shopping list.
//!
//! Every action either applies in full or is rejected, in which case the
//! items and filters stay exactly as they were and the reason lands in
//! `last_error`.

use crate::types::{Item, ItemId, ListAction, ListState, Rejection};
use shopping_list_core::{
    SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec,
};
use std::sync::Arc;

/// Environment dependencies for the list reducer
#[derive(Clone)]
pub struct ListEnvironment {
    /// Source of ids for new items
    pub ids: Arc<dyn IdGenerator>,
}

impl ListEnvironment {
    /// Creates a new `ListEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

/// Reducer for the shopping list
#[derive(Clone, Debug, Default)]
pub struct ListReducer;

impl ListReducer {
    /// Creates a new `ListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn require_name(name: &str) -> Result<(), Rejection> {
        if name.trim().is_empty() {
            return Err(Rejection::EmptyName);
        }
        Ok(())
    }

    fn find_mut<'a>(state: &'a mut ListState, id: &ItemId) -> Result<&'a mut Item, Rejection> {
        state.get_mut(id).ok_or(Rejection::UnknownItem(*id))
    }

    /// Applies an action, or explains why it cannot be applied
    fn apply(state: &mut ListState, action: ListAction, env: &ListEnvironment) -> Result<(), Rejection> {
        match action {
            ListAction::AddItem { name } => {
                Self::require_name(&name)?;
                let item = Item::new(ItemId::generate(env.ids.as_ref()), name);
                tracing::info!(id = %item.id, name = %item.name, "Adding item");
                state.items.push(item);
            },

            ListAction::ToggleChecked { id } => {
                let item = Self::find_mut(state, &id)?;
                if item.is_editing {
                    return Err(Rejection::ItemBusy(id));
                }
                item.checked = !item.checked;
                tracing::debug!(%id, checked = item.checked, "Toggled checked");
            },

            ListAction::DeleteItem { id } => {
                let index = state
                    .items
                    .iter()
                    .position(|item| item.id == id)
                    .ok_or(Rejection::UnknownItem(id))?;
                if state.items[index].is_editing {
                    return Err(Rejection::ItemBusy(id));
                }
                let removed = state.items.remove(index);
                tracing::info!(%id, name = %removed.name, "Deleted item");
            },

            ListAction::BeginEdit { id } => {
                Self::find_mut(state, &id)?.is_editing = true;
                tracing::debug!(%id, "Editing item");
            },

            ListAction::CommitEdit { id, name } => {
                let item = Self::find_mut(state, &id)?;
                if !item.is_editing {
                    return Err(Rejection::NotEditing(id));
                }
                Self::require_name(&name)?;
                tracing::info!(%id, from = %item.name, to = %name, "Renamed item");
                item.name = name;
                item.is_editing = false;
            },

            ListAction::ToggleHideCompleted => {
                state.hide_completed = !state.hide_completed;
                tracing::debug!(hide_completed = state.hide_completed, "Toggled hide completed");
            },

            ListAction::SetSearchTerm { term } => {
                state.search_term = term.filter(|term| !term.is_empty());
                tracing::debug!(term = ?state.search_term, "Search term set");
            },
        }
        Ok(())
    }
}

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;
    type Environment = ListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match Self::apply(state, action, env) {
            Ok(()) => state.last_error = None,
            Err(rejection) => {
                tracing::warn!(%rejection, "Action ignored");
                state.last_error = Some(rejection);
            },
        }

        // The list has no side effects; the caller re-renders after every send
        smallvec![Effect::None]
    }
}

//! Renderers: turn the visible part of a [`ListState`] into text.
//!
//! All three views read only what [`ListState::visible_items`] returns, so
//! the filters apply the same way whatever the output format.

use crate::types::{Item, ListState};
use serde::{Deserialize, Serialize};
use shopping_list_core::view::View;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use v_htmlescape::escape;

/// Markup fragment, one `<li>` per visible item
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlView;

/// One `<li>` block
struct HtmlItem<'a>(&'a Item);

impl fmt::Display for HtmlItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.0;
        writeln!(f, r#"<li data-item-id="{}">"#, item.id)?;
        if item.is_editing {
            writeln!(f, r#"  <form id="edit-item-name-form">"#)?;
            writeln!(
                f,
                r#"    <input type="text" name="edit-name" class="js-edit-item-name" value="{}" />"#,
                escape(&item.name)
            )?;
            writeln!(f, "  </form>")?;
        } else {
            let checked = if item.checked { " shopping-item__checked" } else { "" };
            writeln!(
                f,
                r#"  <span class="shopping-item js-shopping-item{checked}">{}</span>"#,
                escape(&item.name)
            )?;
        }

        let disabled = if item.is_editing { " disabled" } else { "" };
        writeln!(f, r#"  <div class="shopping-item-controls">"#)?;
        writeln!(
            f,
            r#"    <button class="shopping-item-edit js-item-edit"><span class="button-label">edit</span></button>"#
        )?;
        writeln!(
            f,
            r#"    <button class="shopping-item-toggle js-item-toggle"{disabled}><span class="button-label">check</span></button>"#
        )?;
        writeln!(
            f,
            r#"    <button class="shopping-item-delete js-item-delete"{disabled}><span class="button-label">delete</span></button>"#
        )?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</li>")
    }
}

impl View for HtmlView {
    type State = ListState;
    type Output = String;

    fn render(&self, state: &ListState) -> String {
        state
            .visible_items()
            .into_iter()
            .map(|item| HtmlItem(item).to_string())
            .collect()
    }
}

/// Plain text for a terminal, one numbered line per visible item
///
/// Row numbers are 1-based positions in the visible list, the same numbers
/// event wiring accepts as item references.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextView;

impl View for TextView {
    type State = ListState;
    type Output = String;

    fn render(&self, state: &ListState) -> String {
        let visible = state.visible_items();
        if visible.is_empty() {
            return "(nothing to show)\n".to_string();
        }

        visible
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let mark = if item.checked { 'x' } else { ' ' };
                let editing = if item.is_editing { " (editing)" } else { "" };
                format!("{}. [{mark}] {}{editing}  #{}\n", index + 1, item.name, item.id.short())
            })
            .collect()
    }
}

/// The visible items as a JSON array
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonView;

impl View for JsonView {
    type State = ListState;
    type Output = String;

    fn render(&self, state: &ListState) -> String {
        let visible = state.visible_items();
        match serde_json::to_string_pretty(&visible) {
            Ok(json) => json + "\n",
            Err(error) => {
                tracing::error!(%error, "Failed to serialize visible items");
                "[]\n".to_string()
            },
        }
    }
}

/// Which view renders the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// [`HtmlView`]
    #[default]
    Html,
    /// [`TextView`]
    Text,
    /// [`JsonView`]
    Json,
}

/// Unknown render format name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown render format {0:?} (expected html, text or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for RenderFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

impl View for RenderFormat {
    type State = ListState;
    type Output = String;

    fn render(&self, state: &ListState) -> String {
        match self {
            Self::Html => HtmlView.render(state),
            Self::Text => TextView.render(state),
            Self::Json => JsonView.render(state),
        }
    }
}

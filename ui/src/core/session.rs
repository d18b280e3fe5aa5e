//! Session-scoped context shared between views.
//!
//! Platforms provide a `Signal<Option<ActiveProject>>` via
//! `use_context_provider` at the app root. The New Project view writes it
//! after a successful submission; the Results view reads it to pre-fill the
//! project id. Passing the context explicitly keeps the active project out of
//! any global mutable state.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveProject {
    pub id: String,
    pub name: String,
}

/// The session signal, if the platform root provided one.
pub fn try_use_session() -> Option<Signal<Option<ActiveProject>>> {
    try_use_context::<Signal<Option<ActiveProject>>>()
}

//! Leptos components for the feed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared signals provided by `App`
//! (`Connection`, `SlotStore`, `UiState`, `ComposerState`, `ClientConfig`)
//! through Leptos context. They hold no state of their own.

pub mod composer;
pub mod confirm_modal;
pub mod connection_notice;
pub mod info_modal;
pub mod slot_table;
pub mod toolbar;

//! Local dialog state for the feed page.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the slot store so dialogs can open and
//! close without touching protocol data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::modal::{ConfirmAction, ConfirmFlow, InfoDialog};

/// Every dialog the feed page can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub delete_all: ConfirmFlow,
    pub empty_undo: ConfirmFlow,
    pub info: InfoDialog,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            delete_all: ConfirmFlow::new(ConfirmAction::DeleteAll),
            empty_undo: ConfirmFlow::new(ConfirmAction::EmptyUndo),
            info: InfoDialog::default(),
        }
    }
}

impl UiState {
    /// The confirmation flow for `action`.
    pub fn flow_mut(&mut self, action: ConfirmAction) -> &mut ConfirmFlow {
        match action {
            ConfirmAction::DeleteAll => &mut self.delete_all,
            ConfirmAction::EmptyUndo => &mut self.empty_undo,
        }
    }

    pub fn flow(&self, action: ConfirmAction) -> ConfirmFlow {
        match action {
            ConfirmAction::DeleteAll => self.delete_all,
            ConfirmAction::EmptyUndo => self.empty_undo,
        }
    }
}

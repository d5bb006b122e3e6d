//! Open/close state machine shared by every dialog in the feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Destructive actions (delete-all, empty-undo) go through a [`ConfirmFlow`]
//! which only releases its outbound event after the dialog has closed. The
//! info dialog reuses the same [`Modal`] machine for read-only display.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use protocol::Outbound;

/// Visibility of a dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Idempotent open/close machine. Owns no business data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modal {
    state: ModalState,
}

impl Modal {
    pub fn state(self) -> ModalState {
        self.state
    }

    pub fn is_open(self) -> bool {
        self.state == ModalState::Open
    }

    pub fn open(&mut self) {
        self.state = ModalState::Open;
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }
}

/// Destructive actions gated behind a confirmation dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteAll,
    EmptyUndo,
}

impl ConfirmAction {
    /// Event sent to the server once the user confirms.
    pub fn event(self) -> Outbound {
        match self {
            Self::DeleteAll => Outbound::DeleteAll,
            Self::EmptyUndo => Outbound::EmptyUndo,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::DeleteAll => "Delete all messages",
            Self::EmptyUndo => "Empty undo history",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::DeleteAll => "Remove every message from the shared feed for all viewers?",
            Self::EmptyUndo => "Permanently discard deleted messages so they can no longer be restored?",
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::DeleteAll => "Delete all",
            Self::EmptyUndo => "Empty undo",
        }
    }
}

/// One confirmation dialog bound to one destructive action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmFlow {
    action: ConfirmAction,
    modal: Modal,
}

impl ConfirmFlow {
    pub fn new(action: ConfirmAction) -> Self {
        Self { action, modal: Modal::default() }
    }

    pub fn action(self) -> ConfirmAction {
        self.action
    }

    pub fn state(self) -> ModalState {
        self.modal.state()
    }

    pub fn is_open(self) -> bool {
        self.modal.is_open()
    }

    pub fn open(&mut self) {
        self.modal.open();
    }

    /// Close the dialog, then hand the action's event to `emit`.
    ///
    /// Confirming a dialog that is not open does nothing, so a repeated click
    /// cannot emit twice. Returns whether `emit` was called.
    pub fn confirm<F>(&mut self, emit: F) -> bool
    where
        F: FnOnce(Outbound),
    {
        if !self.modal.is_open() {
            return false;
        }
        self.modal.close();
        emit(self.action.event());
        true
    }

    /// Close the dialog without emitting anything.
    pub fn cancel(&mut self) {
        self.modal.close();
    }
}

/// Read-only dialog describing one slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InfoDialog {
    modal: Modal,
    uid: Option<String>,
}

impl InfoDialog {
    /// Open the dialog for `uid`, replacing any previous selection.
    pub fn show(&mut self, uid: &str) {
        self.uid = Some(uid.to_owned());
        self.modal.open();
    }

    pub fn close(&mut self) {
        self.modal.close();
        self.uid = None;
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Uid being described, only while the dialog is open.
    pub fn selected(&self) -> Option<&str> {
        if self.modal.is_open() { self.uid.as_deref() } else { None }
    }
}

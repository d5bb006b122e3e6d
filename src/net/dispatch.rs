//! Inbound event routing into the slot store.
//!
//! Each text frame is decoded once and applied once, in arrival order.
//!
//! ERROR HANDLING
//! ==============
//! Malformed frames fail closed: [`handle_frame`] logs the problem and leaves
//! the store untouched, so one bad frame never takes the feed down.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use protocol::{CodecError, Inbound};

use crate::state::slots::{Slot, SlotStore, Upsert};

/// Error returned by [`dispatch_frame`].
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("slot {uid} has an out-of-range timestamp: {source}")]
    Timestamp {
        uid: String,
        #[source]
        source: time::error::ComponentRange,
    },
}

/// What a single inbound event did to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// A new slot was placed at the head of the feed.
    Inserted(String),
    /// An existing slot was updated in place.
    Replaced(String),
    /// A slot was removed.
    Deleted(String),
    /// A delete arrived for a uid that is not in the store.
    AlreadyAbsent(String),
    /// The event type is not handled by this client.
    Ignored,
}

/// Decode one text frame and apply it to `slots`.
///
/// # Errors
///
/// Returns [`DispatchError`] when the frame cannot be decoded or its slot
/// cannot be built; the store is unchanged in that case.
pub fn dispatch_frame(text: &str, slots: &mut SlotStore) -> Result<Dispatched, DispatchError> {
    let event = protocol::decode(text)?;
    apply_event(event, slots)
}

/// Apply an already-decoded event to `slots`.
///
/// # Errors
///
/// Returns [`DispatchError::Timestamp`] when a `new_slot` timestamp is out of
/// range.
pub fn apply_event(event: Inbound, slots: &mut SlotStore) -> Result<Dispatched, DispatchError> {
    match event {
        Inbound::NewSlot(payload) => {
            let uid = payload.uid.clone();
            let slot = Slot::from_wire(payload).map_err(|source| DispatchError::Timestamp { uid: uid.clone(), source })?;
            match slots.upsert(slot) {
                Upsert::Inserted => Ok(Dispatched::Inserted(uid)),
                Upsert::Replaced => Ok(Dispatched::Replaced(uid)),
            }
        }
        Inbound::DeleteSlot { uid } => {
            if slots.remove(&uid).is_some() {
                Ok(Dispatched::Deleted(uid))
            } else {
                Ok(Dispatched::AlreadyAbsent(uid))
            }
        }
        Inbound::Unknown => Ok(Dispatched::Ignored),
    }
}

/// Apply one frame, logging instead of propagating failures.
pub fn handle_frame(text: &str, slots: &mut SlotStore) -> Option<Dispatched> {
    match dispatch_frame(text, slots) {
        Ok(Dispatched::Replaced(uid)) => {
            leptos::logging::log!("replaced duplicate slot {uid}");
            Some(Dispatched::Replaced(uid))
        }
        Ok(Dispatched::Ignored) => {
            leptos::logging::log!("ignoring unhandled frame: {text}");
            Some(Dispatched::Ignored)
        }
        Ok(outcome) => Some(outcome),
        Err(e) => {
            leptos::logging::warn!("dropping inbound frame: {e}");
            None
        }
    }
}

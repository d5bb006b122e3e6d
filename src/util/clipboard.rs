//! Copying slot payloads to the system clipboard.
//!
//! DESIGN
//! ======
//! [`ClipboardWriter`] is the capability the rest of the client depends on.
//! The browser implementation, [`CopyEventClipboard`], has to run inside the
//! user gesture that triggered it: it installs a one-shot capturing `copy`
//! listener, fires `document.execCommand("copy")` and removes the listener
//! before returning.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as a [`ClipboardError`]. [`copy_slot_logged`] is the
//! UI entry point and only logs it; a failed copy changes nothing else.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::state::slots::SlotStore;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available outside the browser")]
    Unavailable,
    #[error("copy command was not delivered to the clipboard listener")]
    NotServed,
    #[error("clipboard call failed: {0}")]
    Platform(String),
    #[error("no slot with uid {0}")]
    UnknownSlot(String),
}

/// Something that can place text on the system clipboard right now.
pub trait ClipboardWriter {
    /// Write `text` synchronously, within the current user gesture.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the platform refuses the write.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy the payload of slot `uid`: its clipboard content if it has one,
/// otherwise its text.
///
/// # Errors
///
/// [`ClipboardError::UnknownSlot`] if the uid is not in the store, or the
/// writer's own error.
pub fn copy_slot<W: ClipboardWriter + ?Sized>(slots: &SlotStore, uid: &str, writer: &W) -> Result<(), ClipboardError> {
    let slot = slots.get(uid).ok_or_else(|| ClipboardError::UnknownSlot(uid.to_owned()))?;
    writer.write_text(slot.clipboard_text())
}

/// [`copy_slot`], logging the outcome. Returns whether the copy succeeded.
pub fn copy_slot_logged<W: ClipboardWriter + ?Sized>(slots: &SlotStore, uid: &str, writer: &W) -> bool {
    match copy_slot(slots, uid, writer) {
        Ok(()) => {
            leptos::logging::log!("copied slot {uid}");
            true
        }
        Err(e) => {
            leptos::logging::warn!("copy failed: {e}");
            false
        }
    }
}

/// Clipboard writer driven by the document `copy` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyEventClipboard;

impl ClipboardWriter for CopyEventClipboard {
    #[cfg(feature = "csr")]
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        use std::cell::Cell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ClipboardError::Unavailable)?;
        let html = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .ok_or(ClipboardError::Unavailable)?;

        let served = Rc::new(Cell::new(false));
        let handler = {
            let served = Rc::clone(&served);
            let payload = text.to_owned();
            Closure::<dyn FnMut(web_sys::ClipboardEvent)>::new(move |event: web_sys::ClipboardEvent| {
                if let Some(data) = event.clipboard_data() {
                    served.set(data.set_data("text/plain", &payload).is_ok());
                }
                event.prevent_default();
            })
        };
        let listener = handler.as_ref().unchecked_ref();

        document
            .add_event_listener_with_callback_and_bool("copy", listener, true)
            .map_err(platform_error)?;
        let executed = html.exec_command("copy");
        let detached = document.remove_event_listener_with_callback_and_bool("copy", listener, true);

        executed.map_err(platform_error)?;
        detached.map_err(platform_error)?;
        if served.get() { Ok(()) } else { Err(ClipboardError::NotServed) }
    }

    #[cfg(not(feature = "csr"))]
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn platform_error(err: wasm_bindgen::JsValue) -> ClipboardError {
    ClipboardError::Platform(format!("{err:?}"))
}

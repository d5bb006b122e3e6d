use std::cell::RefCell;

use protocol::NewSlot;

use super::*;
use crate::state::slots::Slot;

#[derive(Default)]
struct RecordingClipboard {
    written: RefCell<Vec<String>>,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.written.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

struct RefusingClipboard;

impl ClipboardWriter for RefusingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::NotServed)
    }
}

fn store_with(uid: &str, text: &str, clipboard: Option<&str>) -> SlotStore {
    let mut slots = SlotStore::default();
    slots.upsert(
        Slot::from_wire(NewSlot {
            uid: uid.to_owned(),
            text: text.to_owned(),
            clipboard: clipboard.map(str::to_owned),
            nickname: "bob".to_owned(),
            timestamp: 1_700_000_000_000,
        })
        .expect("valid timestamp"),
    );
    slots
}

// =============================================================
// Payload policy
// =============================================================

#[test]
fn copies_text_when_no_clipboard_payload() {
    let slots = store_with("1", "hello", None);
    let writer = RecordingClipboard::default();
    copy_slot(&slots, "1", &writer).expect("copy should succeed");
    assert_eq!(*writer.written.borrow(), vec!["hello".to_owned()]);
}

#[test]
fn copies_clipboard_payload_when_present() {
    let slots = store_with("1", "hello", Some("rich-data"));
    let writer = RecordingClipboard::default();
    copy_slot(&slots, "1", &writer).expect("copy should succeed");
    assert_eq!(*writer.written.borrow(), vec!["rich-data".to_owned()]);
}

#[test]
fn literal_null_payload_is_copied_verbatim() {
    let slots = store_with("1", "hello", Some("null"));
    let writer = RecordingClipboard::default();
    copy_slot(&slots, "1", &writer).expect("copy should succeed");
    assert_eq!(*writer.written.borrow(), vec!["null".to_owned()]);
}

// =============================================================
// Failures
// =============================================================

#[test]
fn unknown_uid_writes_nothing() {
    let slots = store_with("1", "hello", None);
    let writer = RecordingClipboard::default();
    assert_eq!(copy_slot(&slots, "2", &writer), Err(ClipboardError::UnknownSlot("2".to_owned())));
    assert!(writer.written.borrow().is_empty());
}

#[test]
fn writer_error_is_propagated() {
    let slots = store_with("1", "hello", None);
    assert_eq!(copy_slot(&slots, "1", &RefusingClipboard), Err(ClipboardError::NotServed));
}

#[test]
fn logged_copy_reports_success_and_failure() {
    let slots = store_with("1", "hello", None);
    assert!(copy_slot_logged(&slots, "1", &RecordingClipboard::default()));
    assert!(!copy_slot_logged(&slots, "1", &RefusingClipboard));
    assert!(!copy_slot_logged(&slots, "missing", &RecordingClipboard::default()));
}

#[cfg(not(feature = "csr"))]
#[test]
fn copy_event_clipboard_is_unavailable_off_browser() {
    assert_eq!(CopyEventClipboard.write_text("x"), Err(ClipboardError::Unavailable));
}

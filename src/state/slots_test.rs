use super::*;

fn wire(uid: &str, text: &str, clipboard: Option<&str>, timestamp: i64) -> NewSlot {
    NewSlot {
        uid: uid.to_owned(),
        text: text.to_owned(),
        clipboard: clipboard.map(str::to_owned),
        nickname: "bob".to_owned(),
        timestamp,
    }
}

fn slot(uid: &str) -> Slot {
    Slot::from_wire(wire(uid, &format!("text {uid}"), None, 1_700_000_000_000)).expect("valid timestamp")
}

// =============================================================
// Slot
// =============================================================

#[test]
fn from_wire_truncates_to_whole_seconds() {
    let slot = Slot::from_wire(wire("1", "hi", None, 1_700_000_000_999)).expect("valid timestamp");
    assert_eq!(slot.timestamp.unix_timestamp(), 1_700_000_000);
    assert_eq!(slot.timestamp.nanosecond(), 0);
}

#[test]
fn from_wire_truncates_pre_epoch_times_downwards() {
    let slot = Slot::from_wire(wire("1", "hi", None, -1)).expect("valid timestamp");
    assert_eq!(slot.timestamp.unix_timestamp(), -1);
}

#[test]
fn from_wire_rejects_out_of_range_timestamp() {
    assert!(Slot::from_wire(wire("1", "hi", None, i64::MAX)).is_err());
}

#[test]
fn clipboard_text_falls_back_to_text() {
    let slot = Slot::from_wire(wire("1", "hello", None, 0)).expect("valid timestamp");
    assert_eq!(slot.clipboard_text(), "hello");
}

#[test]
fn clipboard_text_prefers_payload() {
    let slot = Slot::from_wire(wire("1", "hello", Some("rich-data"), 0)).expect("valid timestamp");
    assert_eq!(slot.clipboard_text(), "rich-data");
}

#[test]
fn clipboard_text_treats_literal_null_as_data() {
    let slot = Slot::from_wire(wire("1", "hello", Some("null"), 0)).expect("valid timestamp");
    assert_eq!(slot.clipboard_text(), "null");
}

// =============================================================
// SlotStore ordering
// =============================================================

#[test]
fn store_default_is_empty() {
    let store = SlotStore::default();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.ordered().count(), 0);
}

#[test]
fn ordered_is_newest_insertion_first() {
    let mut store = SlotStore::default();
    store.upsert(slot("A"));
    store.upsert(slot("B"));
    store.upsert(slot("C"));
    assert_eq!(store.uids(), vec!["C", "B", "A"]);
    let ordered: Vec<_> = store.ordered().map(|s| s.uid.as_str()).collect();
    assert_eq!(ordered, vec!["C", "B", "A"]);
}

#[test]
fn upsert_duplicate_uid_replaces_in_place() {
    let mut store = SlotStore::default();
    store.upsert(slot("A"));
    store.upsert(slot("B"));

    let mut updated = slot("A");
    updated.text = "edited".to_owned();
    assert_eq!(store.upsert(updated), Upsert::Replaced);

    assert_eq!(store.len(), 2);
    assert_eq!(store.uids(), vec!["B", "A"]);
    assert_eq!(store.get("A").map(|s| s.text.as_str()), Some("edited"));
}

#[test]
fn upsert_new_uid_reports_inserted() {
    let mut store = SlotStore::default();
    assert_eq!(store.upsert(slot("A")), Upsert::Inserted);
    assert!(store.contains("A"));
}

// =============================================================
// SlotStore removal
// =============================================================

#[test]
fn remove_drops_slot_and_order_entry() {
    let mut store = SlotStore::default();
    store.upsert(slot("A"));
    store.upsert(slot("B"));
    let removed = store.remove("A").expect("A was present");
    assert_eq!(removed.uid, "A");
    assert_eq!(store.uids(), vec!["B"]);
    assert!(!store.contains("A"));
}

#[test]
fn remove_absent_uid_is_noop() {
    let mut store = SlotStore::default();
    store.upsert(slot("A"));
    assert!(store.remove("missing").is_none());
    assert!(store.remove("missing").is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn reinsert_after_remove_goes_to_head() {
    let mut store = SlotStore::default();
    store.upsert(slot("A"));
    store.upsert(slot("B"));
    store.remove("A");
    store.upsert(slot("A"));
    assert_eq!(store.uids(), vec!["A", "B"]);
}

#[test]
fn clear_empties_store() {
    let mut store = SlotStore::default();
    store.upsert(slot("A"));
    store.upsert(slot("B"));
    store.clear();
    assert!(store.is_empty());
    assert!(store.uids().is_empty());
}

#[test]
fn visible_set_is_inserted_minus_deleted_for_interleaved_events() {
    let mut store = SlotStore::default();
    let script: &[(&str, bool)] = &[
        ("1", true),
        ("2", true),
        ("1", false),
        ("3", true),
        ("9", false),
        ("2", false),
        ("4", true),
        ("2", true),
    ];
    for (uid, insert) in script {
        if *insert {
            store.upsert(slot(uid));
        } else {
            store.remove(uid);
        }
    }
    assert_eq!(store.uids(), vec!["2", "4", "3"]);
}

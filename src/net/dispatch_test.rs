use super::*;

fn new_slot_frame(uid: &str, text: &str) -> String {
    serde_json::json!({
        "type": "new_slot",
        "uid": uid,
        "text": text,
        "clipboard": null,
        "nickname": "bob",
        "timestamp": 1_700_000_000_000_i64
    })
    .to_string()
}

fn delete_slot_frame(uid: &str) -> String {
    serde_json::json!({"type": "delete_slot", "uid": uid}).to_string()
}

// =============================================================
// dispatch_frame
// =============================================================

#[test]
fn new_slot_inserts_into_store() {
    let mut store = SlotStore::default();
    let outcome = dispatch_frame(&new_slot_frame("1", "hi"), &mut store).expect("dispatch");
    assert_eq!(outcome, Dispatched::Inserted("1".to_owned()));
    let slot = store.get("1").expect("slot stored");
    assert_eq!(slot.text, "hi");
    assert_eq!(slot.nickname, "bob");
    assert!(slot.clipboard.is_none());
}

#[test]
fn delete_slot_removes_from_store() {
    let mut store = SlotStore::default();
    dispatch_frame(&new_slot_frame("1", "hi"), &mut store).expect("dispatch");
    let outcome = dispatch_frame(&delete_slot_frame("1"), &mut store).expect("dispatch");
    assert_eq!(outcome, Dispatched::Deleted("1".to_owned()));
    assert!(store.is_empty());
}

#[test]
fn delete_slot_for_absent_uid_is_noop() {
    let mut store = SlotStore::default();
    dispatch_frame(&new_slot_frame("1", "hi"), &mut store).expect("dispatch");
    let outcome = dispatch_frame(&delete_slot_frame("2"), &mut store).expect("dispatch");
    assert_eq!(outcome, Dispatched::AlreadyAbsent("2".to_owned()));
    assert_eq!(store.len(), 1);
}

#[test]
fn repeated_new_slot_replaces_in_place() {
    let mut store = SlotStore::default();
    dispatch_frame(&new_slot_frame("1", "first"), &mut store).expect("dispatch");
    dispatch_frame(&new_slot_frame("2", "second"), &mut store).expect("dispatch");
    let outcome = dispatch_frame(&new_slot_frame("1", "again"), &mut store).expect("dispatch");
    assert_eq!(outcome, Dispatched::Replaced("1".to_owned()));
    assert_eq!(store.uids(), vec!["2", "1"]);
    assert_eq!(store.get("1").map(|s| s.text.as_str()), Some("again"));
}

#[test]
fn unknown_type_is_ignored() {
    let mut store = SlotStore::default();
    let outcome = dispatch_frame(r#"{"type":"motd","text":"x"}"#, &mut store).expect("dispatch");
    assert_eq!(outcome, Dispatched::Ignored);
    assert!(store.is_empty());
}

#[test]
fn malformed_json_is_codec_error() {
    let mut store = SlotStore::default();
    let err = dispatch_frame("not json", &mut store).expect_err("should fail");
    assert!(matches!(err, DispatchError::Codec(_)));
}

#[test]
fn out_of_range_timestamp_is_rejected_without_mutation() {
    let mut store = SlotStore::default();
    let frame = serde_json::json!({
        "type": "new_slot",
        "uid": "far",
        "text": "future",
        "timestamp": i64::MAX
    })
    .to_string();
    let err = dispatch_frame(&frame, &mut store).expect_err("should fail");
    assert!(matches!(err, DispatchError::Timestamp { ref uid, .. } if uid == "far"));
    assert!(store.is_empty());
}

// =============================================================
// handle_frame
// =============================================================

#[test]
fn handle_frame_fails_closed_on_garbage() {
    let mut store = SlotStore::default();
    dispatch_frame(&new_slot_frame("1", "hi"), &mut store).expect("dispatch");
    assert!(handle_frame("{\"type\":\"new_slot\"}", &mut store).is_none());
    assert!(handle_frame("", &mut store).is_none());
    assert_eq!(store.uids(), vec!["1"]);
}

#[test]
fn handle_frame_processes_events_in_arrival_order() {
    let mut store = SlotStore::default();
    for frame in [
        new_slot_frame("A", "a"),
        new_slot_frame("B", "b"),
        delete_slot_frame("A"),
        new_slot_frame("C", "c"),
    ] {
        handle_frame(&frame, &mut store);
    }
    assert_eq!(store.uids(), vec!["C", "B"]);
}

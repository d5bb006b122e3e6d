use super::*;

#[test]
fn enter_submits() {
    assert!(is_submit_key("Enter"));
}

#[test]
fn other_keys_do_not_submit() {
    assert!(!is_submit_key("a"));
    assert!(!is_submit_key("Tab"));
    assert!(!is_submit_key("NumpadEnter"));
}

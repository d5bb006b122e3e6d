use super::*;

#[test]
fn feed_is_live_only_when_open() {
    assert!(feed_is_live(ConnectionState::Open));
    assert!(!feed_is_live(ConnectionState::Disconnected));
    assert!(!feed_is_live(ConnectionState::Connecting));
    assert!(!feed_is_live(ConnectionState::Closed));
}

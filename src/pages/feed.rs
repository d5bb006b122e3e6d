//! Feed page: toolbar, composer, the live slot table and its dialogs.
//!
//! ARCHITECTURE
//! ============
//! The slot table is only rendered while the connection is open. Any other
//! connection state swaps it for `ConnectionNotice`, mirroring how the feed
//! is rebuilt from scratch on every successful connect.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;

use crate::components::composer::Composer;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::connection_notice::ConnectionNotice;
use crate::components::info_modal::InfoModal;
use crate::components::slot_table::SlotTable;
use crate::components::toolbar::Toolbar;
use crate::net::connection::{Connection, ConnectionState};
use crate::state::modal::ConfirmAction;

/// The single page of the client.
#[component]
pub fn FeedPage() -> impl IntoView {
    let conn = expect_context::<RwSignal<Connection>>();
    let live = move || feed_is_live(conn.with(Connection::state));

    view! {
        <div class="feed-page">
            <Toolbar />
            <Composer />
            <div class="feed-page__slots">
                <Show when=live fallback=|| view! { <ConnectionNotice /> }>
                    <SlotTable />
                </Show>
            </div>
            <InfoModal />
            <ConfirmModal action=ConfirmAction::DeleteAll />
            <ConfirmModal action=ConfirmAction::EmptyUndo />
        </div>
    }
}

fn feed_is_live(state: ConnectionState) -> bool {
    state == ConnectionState::Open
}

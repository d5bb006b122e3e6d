//! Notice shown in place of the feed whenever the socket is not open.

#[cfg(test)]
#[path = "connection_notice_test.rs"]
mod connection_notice_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::connection::{Connection, ConnectionState};
use crate::state::slots::SlotStore;

/// Placeholder for the feed while the socket is not open; offers a manual
/// reconnect once it has closed.
#[component]
pub fn ConnectionNotice() -> impl IntoView {
    let conn = expect_context::<RwSignal<Connection>>();
    let slots = expect_context::<RwSignal<SlotStore>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    let state = move || conn.with(Connection::state);
    let is_closed = move || state() == ConnectionState::Closed;
    let on_reconnect = move |_| config.with_value(|c| reconnect(conn, slots, c));

    view! {
        <div class="alert" class:alert--danger=is_closed role="alert">
            {move || status_message(state()).unwrap_or_default()}
            <Show when=is_closed>
                <button class="btn" on:click=on_reconnect>"Reconnect"</button>
            </Show>
        </div>
    }
}

/// Text shown while no feed is visible, or `None` once the feed is live.
pub fn status_message(state: ConnectionState) -> Option<&'static str> {
    match state {
        ConnectionState::Disconnected | ConnectionState::Connecting => Some("Connecting to server"),
        ConnectionState::Open => None,
        ConnectionState::Closed => Some("Connection to server lost"),
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn reconnect(conn: RwSignal<Connection>, slots: RwSignal<SlotStore>, config: &ClientConfig) {
    #[cfg(feature = "csr")]
    crate::net::connection::connect(conn, slots, config);
    #[cfg(not(feature = "csr"))]
    leptos::logging::warn!("reconnect is only available in the browser");
}

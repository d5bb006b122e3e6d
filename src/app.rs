//! Root application component and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates every shared signal once and provides it through context;
//! components never reach for globals. In the browser it also starts the
//! first websocket connection.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::net::connection::Connection;
use crate::pages::feed::FeedPage;
use crate::state::composer::ComposerState;
use crate::state::slots::SlotStore;
use crate::state::ui::UiState;
use crate::util::nickname;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_window();
    let conn = RwSignal::new(Connection::default());
    let slots = RwSignal::new(SlotStore::default());
    let ui = RwSignal::new(UiState::default());
    let composer = RwSignal::new(ComposerState::with_nickname(nickname::load()));

    provide_context(config.clone());
    provide_context(conn);
    provide_context(slots);
    provide_context(ui);
    provide_context(composer);

    #[cfg(feature = "csr")]
    crate::net::connection::connect(conn, slots, &config);

    view! {
        <Title text="shareclip" />
        <FeedPage />
    }
}

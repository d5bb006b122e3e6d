//! Feed-wide actions: undo, delete all and empty undo.
//!
//! Delete-all and empty-undo only open their confirmation dialogs here; the
//! events themselves are sent from `ConfirmModal`.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api;
use crate::state::modal::ConfirmAction;
use crate::state::ui::UiState;

/// Toolbar above the feed.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    let open_flow = move |ev: leptos::ev::MouseEvent, action: ConfirmAction| {
        ev.prevent_default();
        ui.update(|u| u.flow_mut(action).open());
    };
    let on_undo = move |_| config.with_value(|c| api::spawn_undo(c.undo_url().to_owned()));

    view! {
        <div class="toolbar">
            <span class="toolbar__title">"shareclip"</span>
            <span class="toolbar__spacer"></span>
            <button class="btn" on:click=on_undo title="Restore the last deleted message">
                "Undo"
            </button>
            <button class="btn btn--warning" on:click=move |ev| open_flow(ev, ConfirmAction::DeleteAll)>
                "Delete all"
            </button>
            <button class="btn btn--warning" on:click=move |ev| open_flow(ev, ConfirmAction::EmptyUndo)>
                "Empty undo"
            </button>
        </div>
    }
}

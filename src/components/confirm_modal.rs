//! Confirmation dialog for a destructive feed action.
//!
//! One component serves every [`ConfirmAction`]; the outbound event is sent
//! only after the dialog has closed, and only from the confirm button.

use leptos::prelude::*;

use crate::net::connection::{self, Connection};
use crate::state::modal::ConfirmAction;
use crate::state::ui::UiState;

/// Dialog bound to `action`, visible while its flow is open.
#[component]
pub fn ConfirmModal(action: ConfirmAction) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let conn = expect_context::<RwSignal<Connection>>();

    let on_confirm = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| {
            if u.flow_mut(action).confirm(|event| connection::fire(conn, event)) {
                leptos::logging::log!("confirmed {}", action.confirm_label());
            }
        });
    };
    let on_cancel = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| u.flow_mut(action).cancel());
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ui.update(|u| u.flow_mut(action).cancel());
        }
    };

    view! {
        <Show when=move || ui.with(|u| u.flow(action).is_open())>
            <div class="dialog-backdrop">
                <div class="dialog dialog--confirm" role="dialog" tabindex="0" on:keydown=on_keydown>
                    <h2 class="dialog__title">{action.title()}</h2>
                    <p class="dialog__body">{action.prompt()}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=on_cancel>"Cancel"</button>
                        <button class="btn btn--danger" on:click=on_confirm>{action.confirm_label()}</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

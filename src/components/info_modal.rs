//! Read-only dialog describing one slot.

#[cfg(test)]
#[path = "info_modal_test.rs"]
mod info_modal_test;

use leptos::prelude::*;

use crate::state::slots::SlotStore;
use crate::state::ui::UiState;
use crate::util::time_format;

/// Info dialog for the slot selected in `UiState::info`.
#[component]
pub fn InfoModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let slots = expect_context::<RwSignal<SlotStore>>();

    let body = move || {
        ui.with(|u| {
            let uid = u.info.selected()?;
            slots.with(|s| info_body(s, uid))
        })
    };
    let on_close = move |_| ui.update(|u| u.info.close());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ui.update(|u| u.info.close());
        }
    };

    view! {
        <Show when=move || ui.with(|u| u.info.is_open())>
            <div class="dialog-backdrop" on:click=on_close>
                <div
                    class="dialog dialog--info"
                    role="dialog"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2 class="dialog__title">"Message info"</h2>
                    <p class="dialog__body">
                        {move || body().unwrap_or_else(|| "This message is no longer in the feed".to_owned())}
                    </p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=on_close>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// "sent at ..." line for `uid`, or `None` if the slot has gone.
pub fn info_body(slots: &SlotStore, uid: &str) -> Option<String> {
    slots.get(uid).map(|slot| time_format::sent_at(slot.timestamp))
}

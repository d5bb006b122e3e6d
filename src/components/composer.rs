//! Nickname and new-message inputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edits land in the shared `ComposerState`. Posting goes through
//! `ComposerState::submit`, which drops empty drafts before anything reaches
//! the connection and keeps the draft when the send fails.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;

use crate::net::connection::{self, Connection};
use crate::state::composer::ComposerState;
use crate::util::nickname;

/// Input row for composing posts.
#[component]
pub fn Composer() -> impl IntoView {
    let composer = expect_context::<RwSignal<ComposerState>>();
    let conn = expect_context::<RwSignal<Connection>>();

    let post = move || {
        let outcome = composer.try_update(|c| c.submit(|event| connection::send_event(conn, &event)));
        match outcome {
            Some(Ok(true)) => leptos::logging::log!("Sending new message"),
            Some(Ok(false)) | None => {}
            Some(Err(e)) => leptos::logging::warn!("post not sent: {e}"),
        }
    };

    let on_nickname_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        nickname::save(&value);
        composer.update(|c| c.nickname = value);
    };
    let on_nickname_clear = move |_| {
        nickname::save("");
        composer.update(|c| c.nickname.clear());
    };
    let on_message_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            ev.prevent_default();
            post();
        }
    };
    let on_clear = move |_| {
        leptos::logging::log!("Clearing new post");
        composer.update(ComposerState::clear_message);
    };

    view! {
        <div class="composer">
            <div class="composer__nickname">
                <label class="composer__label" for="nickname">"Nickname"</label>
                <input
                    id="nickname"
                    class="composer__input"
                    type="text"
                    prop:value=move || composer.with(|c| c.nickname.clone())
                    on:change=on_nickname_change
                />
                <button class="btn" on:click=on_nickname_clear title="Clear nickname">"Clear"</button>
            </div>
            <div class="composer__message">
                <input
                    id="new_message"
                    class="composer__input"
                    type="text"
                    placeholder="New message"
                    prop:value=move || composer.with(|c| c.message.clone())
                    on:input=move |ev| composer.update(|c| c.message = event_target_value(&ev))
                    on:keydown=on_message_keydown
                />
                <button class="btn btn--primary" on:click=move |_| post()>"Post"</button>
                <button class="btn" on:click=on_clear>"Clear"</button>
            </div>
        </div>
    }
}

/// Whether `key` submits the draft.
fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

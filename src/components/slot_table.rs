//! Table of visible slots, newest first, with per-row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows are a projection of `SlotStore`; each action looks the slot up again
//! by uid rather than trusting what was rendered.

#[cfg(test)]
#[path = "slot_table_test.rs"]
mod slot_table_test;

use leptos::prelude::*;
use protocol::Outbound;

use crate::net::connection::{self, Connection};
use crate::state::slots::{Slot, SlotStore};
use crate::state::ui::UiState;
use crate::util::clipboard::{CopyEventClipboard, copy_slot_logged};

/// Live feed table.
#[component]
pub fn SlotTable() -> impl IntoView {
    let slots = expect_context::<RwSignal<SlotStore>>();

    view! {
        <table class="slot-table">
            <thead>
                <tr>
                    <th>"Message"</th>
                    <th>"Sender"</th>
                    <th>"Control"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || slots.with(|s| s.ordered().cloned().collect::<Vec<_>>())
                    key=|slot: &Slot| slot.clone()
                    children=move |slot| view! { <SlotRow row=slot /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn SlotRow(row: Slot) -> impl IntoView {
    let slots = expect_context::<RwSignal<SlotStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let conn = expect_context::<RwSignal<Connection>>();

    let uid = row.uid.clone();
    let on_info = {
        let uid = uid.clone();
        move |_| ui.update(|u| u.info.show(&uid))
    };
    let on_copy = {
        let uid = uid.clone();
        move |_| {
            slots.with_untracked(|s| copy_slot_logged(s, &uid, &CopyEventClipboard));
        }
    };
    let on_delete = move |_| {
        leptos::logging::log!("Sending request to delete slot {uid}");
        connection::fire(conn, Outbound::Delete { uid: uid.clone() });
    };

    view! {
        <tr class="slot-table__row">
            <td class="slot-table__message">{message_view(&row)}</td>
            <td class="slot-table__sender">{row.nickname.clone()}</td>
            <td class="slot-table__controls">
                <div class="btn-group">
                    <button class="btn btn--info" on:click=on_info>"Info"</button>
                    <button class="btn" on:click=on_copy>"Copy"</button>
                    <button class="btn btn--warning" on:click=on_delete>"Delete"</button>
                </div>
            </td>
        </tr>
    }
}

/// Message cell: plain text, or a link when the text is a web address.
fn message_view(slot: &Slot) -> AnyView {
    match link_target(&slot.text) {
        Some(href) => {
            let href = href.to_owned();
            view! {
                <a href=href target="_blank" rel="noopener noreferrer">
                    {slot.text.clone()}
                </a>
            }
            .into_any()
        }
        None => slot.text.clone().into_any(),
    }
}

/// `text` as a link target when it is a single http(s) URL.
fn link_target(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    let is_web = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if is_web && !trimmed.contains(char::is_whitespace) { Some(trimmed) } else { None }
}

//! Browser websocket plumbing that drives [`Connection`].
//!
//! Only compiled for the browser; native builds exercise the same lifecycle
//! through `Connection` directly.

#![cfg(feature = "csr")]

use std::pin::Pin;

use futures::channel::mpsc;
use futures::{Sink, SinkExt, StreamExt};
use gloo_net::websocket::futures::WebSocket;
use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::Connection;
use crate::config::ClientConfig;
use crate::state::slots::SlotStore;

/// Open the feed socket and run it until it closes.
///
/// Tries each candidate URL in turn, moving on only when construction fails
/// synchronously. If none can be constructed the connection goes straight to
/// `Closed`.
pub fn connect(connection: RwSignal<Connection>, slots: RwSignal<SlotStore>, config: &ClientConfig) {
    let Some(generation) = connection.try_update(Connection::begin_connect) else {
        return;
    };
    let Some(ws) = open_first(&config.websocket_candidates()) else {
        connection.update(|c| {
            c.on_close(generation);
        });
        return;
    };
    leptos::task::spawn_local(run_socket(ws, generation, connection, slots));
}

fn open_first(candidates: &[String]) -> Option<WebSocket> {
    for url in candidates {
        leptos::logging::log!("Looking for ws at {url}");
        match WebSocket::open(url) {
            Ok(ws) => return Some(ws),
            Err(e) => leptos::logging::warn!("cannot open {url}: {e}"),
        }
    }
    None
}

async fn run_socket(mut ws: WebSocket, generation: u64, connection: RwSignal<Connection>, slots: RwSignal<SlotStore>) {
    use gloo_net::websocket::{Message, State};

    // The sink turns ready once the browser finishes the handshake.
    let ready = futures::future::poll_fn(|cx| Pin::new(&mut ws).poll_ready(cx)).await;
    if let Err(e) = ready {
        leptos::logging::warn!("WS handshake failed: {e}");
    }
    if !matches!(ws.state(), State::Open) {
        connection.update(|c| {
            c.on_close(generation);
        });
        return;
    }

    let (tx, mut rx) = mpsc::unbounded::<String>();
    let accepted = connection
        .try_update(|c| slots.try_update(|s| c.on_open(generation, tx, s)))
        .flatten()
        .unwrap_or(false);
    if !accepted {
        return;
    }

    let (mut ws_write, mut ws_read) = ws.split();

    // Ends once the connection drops its sender on close or reconnect.
    let send_task = async {
        while let Some(text) = rx.next().await {
            if let Err(e) = ws_write.send(Message::Text(text)).await {
                leptos::logging::warn!("WS send error: {e}");
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    connection.with_untracked(|c| {
                        slots.update(|s| {
                            c.on_message(generation, &text, s);
                        });
                    });
                }
                Ok(Message::Bytes(bytes)) => {
                    leptos::logging::log!("ignoring {} byte binary frame", bytes.len());
                }
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    connection.update(|c| {
        c.on_close(generation);
    });
}

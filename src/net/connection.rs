//! Connection manager for the feed websocket.
//!
//! [`Connection`] is the single owner of the socket's outbound half and its
//! lifecycle state. The browser plumbing in `connection_socket.rs` drives it
//! through `begin_connect` → `on_open` → `on_message`* → `on_close`; every
//! outbound event funnels through [`Connection::send`].
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Connection` lives in an `RwSignal` provided by the app root. There is
//! no automatic reconnect: once `Closed`, the page shows a notice and the user
//! starts a new attempt by hand.
//!
//! ERROR HANDLING
//! ==============
//! Sends while the socket is not `Open` are dropped, logged, and reported as
//! [`SendError::NotOpen`]; nothing is queued.

#[path = "connection_socket.rs"]
mod connection_socket;

#[cfg(feature = "csr")]
pub use self::connection_socket::connect;

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use futures::channel::mpsc::UnboundedSender;
use leptos::prelude::{RwSignal, WithUntracked};
use protocol::{CodecError, Outbound};

use crate::net::dispatch::{self, Dispatched};
use crate::state::slots::SlotStore;

/// Lifecycle of the feed websocket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No attempt has been made yet.
    #[default]
    Disconnected,
    /// A socket was constructed and is waiting for the handshake.
    Connecting,
    /// The socket is open and `helo` has been sent.
    Open,
    /// The socket closed or could not be opened; waiting for a manual reconnect.
    Closed,
}

/// Error returned by [`Connection::send`].
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("connection is {0:?}")]
    NotOpen(ConnectionState),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("socket writer has shut down")]
    ChannelClosed,
}

#[derive(Debug, Default)]
pub struct Connection {
    state: ConnectionState,
    /// Incremented per connect attempt so callbacks from a replaced socket
    /// can be recognised and ignored.
    generation: u64,
    outbox: Option<UnboundedSender<String>>,
}

impl Connection {
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new attempt, abandoning any previous socket.
    pub fn begin_connect(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.state = ConnectionState::Connecting;
        self.outbox = None;
        self.generation
    }

    /// The socket for `generation` finished its handshake.
    ///
    /// Discards every slot shown so far and sends `helo`; the server answers
    /// with the current feed. Returns `false` for a superseded attempt.
    pub fn on_open(&mut self, generation: u64, outbox: UnboundedSender<String>, slots: &mut SlotStore) -> bool {
        if generation != self.generation {
            leptos::logging::log!("ignoring open from superseded socket #{generation}");
            return false;
        }
        self.state = ConnectionState::Open;
        self.outbox = Some(outbox);
        slots.clear();
        if let Err(e) = self.send(&Outbound::Helo) {
            leptos::logging::warn!("handshake not sent: {e}");
        }
        true
    }

    /// Route one inbound text frame to the dispatcher.
    pub fn on_message(&self, generation: u64, text: &str, slots: &mut SlotStore) -> Option<Dispatched> {
        if generation != self.generation || self.state != ConnectionState::Open {
            return None;
        }
        dispatch::handle_frame(text, slots)
    }

    /// The socket for `generation` closed or failed to open.
    pub fn on_close(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = ConnectionState::Closed;
        self.outbox = None;
        leptos::logging::log!("WebSocket is closed");
        true
    }

    /// Serialize `event` and hand it to the socket writer.
    ///
    /// # Errors
    ///
    /// [`SendError::NotOpen`] unless the connection is `Open`,
    /// [`SendError::Codec`] if encoding fails, and
    /// [`SendError::ChannelClosed`] if the writer task has already stopped.
    pub fn send(&self, event: &Outbound) -> Result<(), SendError> {
        if self.state != ConnectionState::Open {
            return Err(SendError::NotOpen(self.state));
        }
        let Some(outbox) = &self.outbox else {
            return Err(SendError::ChannelClosed);
        };
        let text = protocol::encode(event)?;
        leptos::logging::log!("Sending message {text}");
        outbox.unbounded_send(text).map_err(|_| SendError::ChannelClosed)
    }
}

/// Send through the shared connection signal.
///
/// # Errors
///
/// Propagates [`Connection::send`] failures; a disposed signal reports
/// [`SendError::ChannelClosed`].
pub fn send_event(connection: RwSignal<Connection>, event: &Outbound) -> Result<(), SendError> {
    connection
        .try_with_untracked(|c| c.send(event))
        .unwrap_or(Err(SendError::ChannelClosed))
}

/// Send `event` from a UI handler, logging it if it could not be sent.
pub fn fire(connection: RwSignal<Connection>, event: Outbound) {
    if let Err(e) = send_event(connection, &event) {
        leptos::logging::warn!("{} not sent: {e}", event.kind());
    }
}

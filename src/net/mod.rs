//! Networking modules for the feed websocket and HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `connection` owns the websocket lifecycle, `dispatch` turns inbound frames
//! into slot store mutations, and `api` wraps the undo endpoint.

pub mod api;
pub mod connection;
pub mod dispatch;

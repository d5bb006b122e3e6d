//! Shared event model and JSON codec for the shareclip websocket.
//!
//! This crate owns the wire representation spoken between the feed server and
//! the browser client. Every frame is a JSON object discriminated by its
//! `type` field; payload fields sit next to the discriminant.
//!
//! DESIGN
//! ======
//! Inbound and outbound events are separate enums so the client can never
//! emit an event it is only supposed to receive. Unknown inbound types decode
//! to [`Inbound::Unknown`] instead of failing, letting newer servers add
//! events without breaking older clients.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Error returned by [`encode`] and [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text frame was not valid JSON or did not match any known event shape.
    #[error("failed to decode event: {0}")]
    Decode(#[source] serde_json::Error),
    /// The outbound event could not be serialized.
    #[error("failed to encode event: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Events the server pushes to connected viewers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inbound {
    /// A slot was added to the shared feed.
    NewSlot(NewSlot),
    /// A slot was removed from the shared feed.
    DeleteSlot {
        /// Identifier of the removed slot.
        uid: String,
    },
    /// Any `type` this client does not understand.
    #[serde(other)]
    Unknown,
}

/// Payload of a `new_slot` event.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewSlot {
    /// Server-assigned identifier, unique among live slots.
    pub uid: String,
    /// Display text of the message.
    pub text: String,
    /// Richer content to place on the clipboard instead of `text`.
    #[serde(default)]
    pub clipboard: Option<String>,
    /// Display name of the sender.
    #[serde(default)]
    pub nickname: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_timestamp_ms")]
    pub timestamp: i64,
}

/// Events the client sends to the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outbound {
    /// Handshake sent once the socket is open; the server answers with the
    /// current feed as a sequence of `new_slot` events.
    Helo,
    /// Submit a new message to the feed.
    Post {
        /// Message body, never empty.
        message: String,
        /// Sender display name.
        nickname: String,
    },
    /// Ask the server to delete one slot.
    Delete {
        /// Identifier of the slot to delete.
        uid: String,
    },
    /// Ask the server to delete every slot.
    DeleteAll,
    /// Ask the server to discard its undo history.
    EmptyUndo,
}

impl Outbound {
    /// Wire discriminant of this event, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Helo => "helo",
            Self::Post { .. } => "post",
            Self::Delete { .. } => "delete",
            Self::DeleteAll => "delete_all",
            Self::EmptyUndo => "empty_undo",
        }
    }
}

/// Encode an outbound event as a JSON text frame.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode(event: &Outbound) -> Result<String, CodecError> {
    serde_json::to_string(event).map_err(CodecError::Encode)
}

/// Decode a JSON text frame into an inbound event.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON, a missing `type`, or a
/// known `type` whose payload fields are missing or mistyped.
pub fn decode(text: &str) -> Result<Inbound, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Decode)
}

/// Accept either epoch milliseconds (integer or float) or an ISO-8601 string.
///
/// Strings without an offset are taken as UTC, which is what the feed server
/// writes.
fn deserialize_timestamp_ms<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float.floor() as i64);
            }
            Err(D::Error::custom("timestamp out of range"))
        }
        Value::String(raw) => {
            parse_iso8601_ms(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
        }
        _ => Err(D::Error::custom("expected number or string timestamp")),
    }
}

fn parse_iso8601_ms(raw: &str) -> Option<i64> {
    let parsed = match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(dt) => dt,
        Err(_) => {
            let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
            match PrimitiveDateTime::parse(raw, naive) {
                Ok(dt) => dt.assume_utc(),
                Err(_) => return None,
            }
        }
    };
    match i64::try_from(parsed.unix_timestamp_nanos() / 1_000_000) {
        Ok(ms) => Some(ms),
        Err(_) => None,
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

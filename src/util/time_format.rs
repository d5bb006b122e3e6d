//! Display formatting for slot timestamps.
//!
//! Slots carry UTC instants truncated to whole seconds. The feed shows them in
//! the viewer's local time as `YYYY-MM-DD HH:MM:SS`.

#[cfg(test)]
#[path = "time_format_test.rs"]
mod time_format_test;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Render `instant` at `offset` as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(instant: OffsetDateTime, offset: UtcOffset) -> String {
    let local = instant.to_offset(offset);
    let layout = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    match local.format(layout) {
        Ok(text) => text,
        Err(e) => {
            leptos::logging::warn!("cannot format timestamp {}: {e}", instant.unix_timestamp());
            instant.unix_timestamp().to_string()
        }
    }
}

/// The viewer's UTC offset at `instant`.
///
/// Off-browser this is always UTC.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn local_offset(instant: OffsetDateTime) -> UtcOffset {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_precision_loss)]
        let millis = (instant.unix_timestamp() * 1000) as f64;
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
        // getTimezoneOffset is minutes behind UTC, so the sign is flipped.
        #[allow(clippy::cast_possible_truncation)]
        let seconds = (-date.get_timezone_offset() * 60.0) as i32;
        match UtcOffset::from_whole_seconds(seconds) {
            Ok(offset) => offset,
            Err(e) => {
                leptos::logging::warn!("ignoring browser time zone offset: {e}");
                UtcOffset::UTC
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        UtcOffset::UTC
    }
}

/// `instant` in the viewer's local time.
pub fn display_local(instant: OffsetDateTime) -> String {
    format_timestamp(instant, local_offset(instant))
}

/// Body text of the info dialog for a slot created at `instant`.
pub fn sent_at(instant: OffsetDateTime) -> String {
    format!("sent at {}", display_local(instant))
}

//! Utility helpers shared across the feed's components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (clipboard, `localStorage`, local time zone) live here so
//! components and state stay testable off-browser.

pub mod clipboard;
pub mod nickname;
pub mod time_format;

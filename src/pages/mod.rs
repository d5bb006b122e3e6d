//! Page-level components.

pub mod feed;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`slots`, `composer`, dialogs) so components can
//! depend on small focused models. All of it is plain Rust; components wrap
//! it in `RwSignal`s.

pub mod composer;
pub mod modal;
pub mod slots;
pub mod ui;

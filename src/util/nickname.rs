//! Nickname persistence in `localStorage`.
//!
//! The value is stored as a raw string under [`STORAGE_KEY`], read once at
//! startup and written whenever the nickname input changes or is cleared.
//! Storage is best-effort: off-browser, or when storage is blocked, loads
//! return `None` and saves are dropped with a log line.

#[cfg(test)]
#[path = "nickname_test.rs"]
mod nickname_test;

pub const STORAGE_KEY: &str = "nickname";

/// Read the saved nickname, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        match local_storage()?.get_item(STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                leptos::logging::warn!("cannot read nickname: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist `nickname`. An empty string is stored as-is.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn save(nickname: &str) {
    leptos::logging::log!("nickname changed to {nickname}");
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.set_item(STORAGE_KEY, nickname) {
            leptos::logging::warn!("cannot save nickname: {e:?}");
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            leptos::logging::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}

//! HTTP helpers for the feed server.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native: returns [`ApiError::Unavailable`] since there is no page to talk to.
//!
//! ERROR HANDLING
//! ==============
//! The undo request is fire-and-forget; the outcome is only logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("undo request failed: {0}")]
    Status(u16),
    #[error("http is not available outside the browser")]
    Unavailable,
}

/// Ask the server to restore the most recently deleted slot via `GET {url}`.
///
/// The restored slot arrives over the websocket as an ordinary `new_slot`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request cannot be sent or the server answers
/// with a non-OK status.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn request_undo(url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        match resp.status() {
            200 => {}
            status => return Err(ApiError::Status(status)),
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fire the undo request in the background and log the outcome.
pub fn spawn_undo(url: String) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            log_undo_outcome(&request_undo(&url).await);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        log_undo_outcome(&futures::executor::block_on(request_undo(&url)));
    }
}

fn log_undo_outcome(result: &Result<(), ApiError>) {
    match result {
        Ok(()) => leptos::logging::log!("got undo response"),
        Err(e) => leptos::logging::warn!("undo failed: {e}"),
    }
}

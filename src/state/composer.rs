//! Draft message and nickname entered by the local user.
//!
//! Empty messages never leave the browser: [`ComposerState::submit`] rejects
//! them before any send is attempted.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use protocol::Outbound;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    /// Text of the message being written.
    pub message: String,
    /// Sender name attached to every post; persisted across page loads.
    pub nickname: String,
}

impl ComposerState {
    pub fn with_nickname(nickname: Option<String>) -> Self {
        Self { message: String::new(), nickname: nickname.unwrap_or_default() }
    }

    /// The `post` event for the current draft, or `None` if the draft is empty.
    pub fn post_event(&self) -> Option<Outbound> {
        if self.message.is_empty() {
            return None;
        }
        Some(Outbound::Post { message: self.message.clone(), nickname: self.nickname.clone() })
    }

    /// Hand the draft to `send` and clear it once the send succeeds.
    ///
    /// Returns `Ok(false)` without calling `send` when the draft is empty.
    /// On a failed send the draft is kept so the user can retry.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `send`.
    pub fn submit<E, F>(&mut self, send: F) -> Result<bool, E>
    where
        F: FnOnce(Outbound) -> Result<(), E>,
    {
        let Some(event) = self.post_event() else {
            leptos::logging::log!("Not sending zero length message");
            return Ok(false);
        };
        send(event)?;
        self.message.clear();
        Ok(true)
    }

    pub fn clear_message(&mut self) {
        self.message.clear();
    }
}

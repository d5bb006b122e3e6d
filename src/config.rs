//! Endpoint configuration derived from the hosting page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The feed server mounts the client under a path prefix and serves the
//! websocket at `{prefix}/ws` and the undo endpoint at `{prefix}/undo`. The
//! page may embed a JSON blob in `<script id="shareclip-config">` to override
//! either path; otherwise both are derived from `window.location`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional inline JSON override.
pub const CONFIG_ELEMENT_ID: &str = "shareclip-config";

/// Path overrides the hosting page can embed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub ws_path: Option<String>,
    pub undo_path: Option<String>,
}

impl PageConfig {
    /// Parse the inline JSON override.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when `raw` is not a valid override object.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Resolved endpoints for one page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// `host[:port]` the page was served from.
    pub host: String,
    /// Whether the page itself was served over https.
    pub secure_page: bool,
    /// Absolute path of the websocket endpoint.
    pub ws_path: String,
    /// Absolute path of the undo endpoint.
    pub undo_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_location("http:", "localhost:8080", "/")
    }
}

impl ClientConfig {
    /// Derive endpoints from `location.protocol`, `location.host` and
    /// `location.pathname`.
    pub fn from_location(protocol: &str, host: &str, pathname: &str) -> Self {
        let prefix = path_prefix(pathname);
        Self {
            host: host.to_owned(),
            secure_page: protocol.trim_end_matches(':').eq_ignore_ascii_case("https"),
            ws_path: format!("{prefix}/ws"),
            undo_path: format!("{prefix}/undo"),
        }
    }

    /// Apply paths supplied by the hosting page.
    #[must_use]
    pub fn with_overrides(mut self, page: PageConfig) -> Self {
        if let Some(ws_path) = page.ws_path {
            self.ws_path = ws_path;
        }
        if let Some(undo_path) = page.undo_path {
            self.undo_path = undo_path;
        }
        self
    }

    /// Websocket URLs to try, in order.
    ///
    /// The secure scheme leads; on a page served over plain http the insecure
    /// scheme leads instead, because a `wss` attempt against an http-only server
    /// fails asynchronously where the fallback cannot catch it.
    pub fn websocket_candidates(&self) -> [String; 2] {
        let secure = format!("wss://{}{}", self.host, self.ws_path);
        let insecure = format!("ws://{}{}", self.host, self.ws_path);
        if self.secure_page { [secure, insecure] } else { [insecure, secure] }
    }

    pub fn undo_url(&self) -> &str {
        &self.undo_path
    }

    /// Read the configuration of the current page.
    pub fn from_window() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let location = window.location();
            let config = match (location.protocol(), location.host(), location.pathname()) {
                (Ok(protocol), Ok(host), Ok(pathname)) => Self::from_location(&protocol, &host, &pathname),
                _ => Self::default(),
            };
            match read_page_config(&window) {
                Some(page) => config.with_overrides(page),
                None => config,
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "csr")]
fn read_page_config(window: &web_sys::Window) -> Option<PageConfig> {
    let raw = window.document()?.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    match PageConfig::parse(&raw) {
        Ok(page) => Some(page),
        Err(e) => {
            leptos::logging::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
            None
        }
    }
}

/// Directory part of a page path, without a trailing slash.
fn path_prefix(pathname: &str) -> String {
    let trimmed = match pathname.rsplit_once('/') {
        Some((dir, last)) if last.contains('.') => dir,
        _ => pathname,
    };
    trimmed.trim_end_matches('/').to_owned()
}

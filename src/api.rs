//! HTTP client for the rule-set backend
//!
//! The backend exposes the whole config as one document: `GET /groups`
//! returns it, `PUT /groups` replaces it, and `GET /system/interfaces`
//! supplies the read-only interface ids. There are no partial-update
//! endpoints; normalization always operates on a whole document.
//!
//! Calls block with a fixed 30-second timeout and are never retried; a
//! failure surfaces as [`Error::Transport`] and leaves caller state
//! unchanged. Re-attempting is the caller's choice.

use crate::core::error::{Error, Result};
use crate::core::model::{Config, Interfaces};
use std::time::Duration;

/// Fixed request timeout; an in-flight request aborts itself when it elapses.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client bound to one backend base URL (e.g. `http://router/api/v1`).
pub struct Client {
    agent: ureq::Agent,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(TIMEOUT).build();
        Client {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetches and normalizes the full config document.
    pub fn fetch_groups(&self) -> Result<Config> {
        let url = self.url("/groups");
        tracing::debug!(%url, "fetching groups");
        let body = self
            .agent
            .get(&url)
            .call()
            .map_err(transport_error)?
            .into_string()?;
        Config::parse(&body)
    }

    /// Replaces the full config document on the backend.
    pub fn save_groups(&self, config: &Config) -> Result<()> {
        let url = self.url("/groups");
        tracing::debug!(%url, groups = config.groups.len(), "saving groups");
        self.agent
            .put(&url)
            .set("Content-Type", "application/json")
            .send_string(&config.to_json_string()?)
            .map_err(transport_error)?;
        Ok(())
    }

    /// Fetches the interface ids known to the backend.
    pub fn fetch_interfaces(&self) -> Result<Interfaces> {
        let url = self.url("/system/interfaces");
        tracing::debug!(%url, "fetching interfaces");
        let body = self
            .agent
            .get(&url)
            .call()
            .map_err(transport_error)?
            .into_string()?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Maps a ureq failure to [`Error::Transport`], preferring the response body
/// text over the bare status line when the backend sent one.
fn transport_error(err: ureq::Error) -> Error {
    match err {
        ureq::Error::Status(status, response) => {
            let status_text = response.status_text().to_string();
            let body = response.into_string().unwrap_or_default();
            let message = if body.trim().is_empty() {
                status_text
            } else {
                body
            };
            Error::Transport {
                message,
                status: Some(status),
            }
        }
        ureq::Error::Transport(transport) => Error::Transport {
            message: transport.to_string(),
            status: None,
        },
    }
}

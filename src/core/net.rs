// src/core/net.rs
//
// Blocking HTTPS GET. Both Eurostat endpoints and the Nuts2json mirror are
// TLS-only, so this goes through reqwest (rustls) rather than raw TCP.
// One request per document, no retries: a fetch either completes or the
// whole pipeline invocation fails.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{PipelineError, Result};

static CLIENT: OnceLock<Client> = OnceLock::new();

fn client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            // Builder only fails on TLS backend misconfiguration; nothing
            // the caller could recover from at runtime.
            .unwrap_or_default()
    })
}

/// Fetch `url` and return the response body as text.
/// Non-2xx statuses are errors; there is no partial-data mode.
pub fn http_get(url: &str) -> Result<String> {
    let fetch_err = |reason: String| PipelineError::Fetch {
        url: s!(url),
        reason,
    };

    let resp = client()
        .get(url)
        .send()
        .map_err(|e| fetch_err(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(fetch_err(format!("HTTP status {status}")));
    }

    resp.text().map_err(|e| fetch_err(e.to_string()))
}

//! `StatusProbe` backed by a real HTTP client.

use std::error::Error;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::check::{ProbeError, StatusProbe};

pub struct HttpProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProbe {
    /// Builds a probe whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProbeError::Setup(describe(&e)))?;
        Ok(Self { client, timeout })
    }

    fn classify(&self, err: reqwest::Error) -> ProbeError {
        if err.is_timeout() {
            ProbeError::Timeout(self.timeout)
        } else if err.is_builder() {
            ProbeError::InvalidUrl(describe(&err))
        } else if err.is_connect() {
            ProbeError::Connect(describe(&err))
        } else {
            ProbeError::Request(describe(&err))
        }
    }
}

#[async_trait]
impl StatusProbe for HttpProbe {
    fn name(&self) -> &str {
        "http"
    }

    async fn check(&self, url: &str) -> Result<u16, ProbeError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| ProbeError::InvalidUrl(format!("{url}: {e}")))?;

        debug!("GET {} (timeout {:?})", parsed, self.timeout);
        let response = self.client.get(parsed).send().await.map_err(|e| {
            let err = self.classify(e);
            warn!("GET {} failed: {}", url, err);
            err
        })?;

        // Body is never read; dropping the response releases the connection.
        let status = response.status().as_u16();
        info!("GET {} -> {}", url, status);
        Ok(status)
    }
}

/// Flattens an error and its sources into one line.
///
/// reqwest's top-level message is generic ("error sending request"), the
/// useful part (DNS failure, refused connection) lives further down the chain.
fn describe(err: &(dyn Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

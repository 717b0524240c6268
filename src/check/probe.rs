use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

/// Errors that can occur while checking a URL.
///
/// Everything except `Setup` is an expected outcome of a check and ends up
/// on screen. `Setup` means the client could not be built at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// URL failed to parse or was rejected by the client.
    InvalidUrl(String),
    /// No response arrived within the timeout.
    Timeout(Duration),
    /// DNS lookup or connection failure.
    Connect(String),
    /// Any other transport failure.
    Request(String),
    /// The HTTP client could not be constructed.
    Setup(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            ProbeError::Timeout(after) => {
                write!(f, "no response within {}s", after.as_secs_f32())
            }
            ProbeError::Connect(msg) => write!(f, "connection failed: {msg}"),
            ProbeError::Request(msg) => write!(f, "request failed: {msg}"),
            ProbeError::Setup(msg) => write!(f, "HTTP client setup failed: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Something that can report the HTTP status of a URL.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    /// Returns the name of the probe.
    fn name(&self) -> &str;

    /// Performs a single GET against `url` and returns the response status code.
    ///
    /// Any response counts as success, including 4xx and 5xx.
    async fn check(&self, url: &str) -> Result<u16, ProbeError>;
}

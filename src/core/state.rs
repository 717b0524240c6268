//! # Session State
//!
//! The one piece of mutable state in a run.
//!
//! ```text
//! Session
//! ├── url: String               // target, fixed at creation
//! ├── phase: Phase              // Initial → Awaiting → Terminal
//! └── outcome: Option<Outcome>  // None until the check reports
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.

use crate::check::ProbeError;

/// Where the display loop is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, check not started yet.
    Initial,
    /// Check in flight, waiting for its result or an interrupt.
    Awaiting,
    /// Shutdown requested. Nothing changes after this.
    Terminal,
}

/// What the check reported. Status and error can never both be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Status(u16),
    Failed(ProbeError),
}

#[derive(Debug)]
pub struct Session {
    url: String,
    pub(crate) phase: Phase,
    pub(crate) outcome: Option<Outcome>,
}

impl Session {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            phase: Phase::Initial,
            outcome: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Status code of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self.outcome {
            Some(Outcome::Status(code)) => Some(code),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ProbeError> {
        match &self.outcome {
            Some(Outcome::Failed(err)) => Some(err),
            _ => None,
        }
    }
}

//! # Actions
//!
//! Everything that can happen during a check becomes an `Action`.
//! The loop starts? That's `Action::Start`.
//! The request comes back? That's `Action::StatusReceived(code)`.
//!
//! `update()` takes the session and an action, mutates the session and
//! returns the `Effect` the adapter should carry out. No I/O here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```

use log::{debug, info, warn};

use crate::check::ProbeError;
use crate::core::state::{Outcome, Phase, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Loop entered; kick off the check.
    Start,
    /// The server answered with this status code.
    StatusReceived(u16),
    /// No response could be obtained.
    CheckFailed(ProbeError),
    /// User pressed the interrupt key.
    Interrupt,
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the background check for the session URL.
    SpawnCheck,
    /// Stop the loop after one final render.
    Quit,
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    match (session.phase, action) {
        (Phase::Initial, Action::Start) => {
            session.phase = Phase::Awaiting;
            Effect::SpawnCheck
        }
        (Phase::Awaiting, Action::StatusReceived(code)) => {
            info!("Check finished with status {}", code);
            finish(session, Some(Outcome::Status(code)))
        }
        (Phase::Awaiting, Action::CheckFailed(err)) => {
            info!("Check failed: {}", err);
            finish(session, Some(Outcome::Failed(err)))
        }
        (Phase::Initial | Phase::Awaiting, Action::Interrupt) => {
            info!("Interrupted by user");
            finish(session, None)
        }
        (Phase::Terminal, action) => {
            debug!("Ignoring {:?} after shutdown", action);
            Effect::None
        }
        (phase, action) => {
            warn!("Unexpected {:?} in phase {:?}", action, phase);
            Effect::None
        }
    }
}

fn finish(session: &mut Session, outcome: Option<Outcome>) -> Effect {
    if outcome.is_some() {
        session.outcome = outcome;
    }
    session.phase = Phase::Terminal;
    Effect::Quit
}

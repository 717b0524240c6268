//! Text shown for a session. Terminal adapters wrap this; the wording lives here.

use std::fmt::Write;

use reqwest::StatusCode;

use crate::core::state::Session;

pub fn view(session: &Session) -> String {
    if let Some(err) = session.error() {
        return format!("\nWe had some trouble: {err}\n");
    }

    let mut line = format!("Checking {} ...", session.url());
    if let Some(code) = session.status() {
        let _ = write!(line, "{} {}!", code, reason_phrase(code));
    }

    format!("\n{line}\n")
}

/// Canonical reason phrase for `code`, or `""` when there is none.
pub fn reason_phrase(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}

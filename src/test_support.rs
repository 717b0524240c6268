//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::check::{ProbeError, StatusProbe};

/// Returns a canned result and counts how often it was asked.
pub struct FixedProbe {
    result: Result<u16, ProbeError>,
    pub calls: AtomicUsize,
}

impl FixedProbe {
    pub fn new(result: Result<u16, ProbeError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl StatusProbe for FixedProbe {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn check(&self, _url: &str) -> Result<u16, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Never answers.
pub struct StalledProbe;

#[async_trait]
impl StatusProbe for StalledProbe {
    fn name(&self) -> &str {
        "stalled"
    }

    async fn check(&self, _url: &str) -> Result<u16, ProbeError> {
        futures::future::pending().await
    }
}

/// Dies without reporting anything.
pub struct PanickingProbe;

#[async_trait]
impl StatusProbe for PanickingProbe {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn check(&self, _url: &str) -> Result<u16, ProbeError> {
        panic!("probe task crashed");
    }
}

pub fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

pub fn ctrl_c() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

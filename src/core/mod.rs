//! # Core Application Logic
//!
//! The state machine behind a status check.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • view() (text)        │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   check    │
//!             │  Adapter   │ ──────▶  │  (reqwest) │
//!             │ (ratatui)  │  spawns  │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Session` struct, the only mutable state in a run
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: The text rendered for a session
//! - [`config`]: Settings resolved from env and CLI

pub mod action;
pub mod config;
pub mod state;
pub mod view;

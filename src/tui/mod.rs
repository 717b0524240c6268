//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, performs the effects
//! returned by `core::action::update`, and translates key presses into
//! actions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! ```text
//! Start ─▶ spawn check ─▶ render "Checking ..." ─▶ select! { result | Ctrl+C }
//!                                                         │
//!                                  update() == Quit ◀─────┘
//!                                         │
//!                                   final render
//! ```
//!
//! The loop never polls: it sleeps in `select!` until the check reports or
//! an input event arrives. In-progress frames go to an inline viewport; the
//! final frame is inserted above it at full height, so it stays in the
//! scrollback with the cursor on the line after it.

mod event;
pub mod ui;

use std::io;
use std::sync::Arc;

use crossterm::event::{Event, EventStream};
use futures::{Stream, StreamExt};
use log::{debug, info, warn};
use ratatui::{TerminalOptions, Viewport};
use tokio::sync::mpsc;

use crate::check::{HttpProbe, StatusProbe};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{Phase, Session};
use crate::tui::event::{TuiEvent, translate};

pub fn build_probe(config: &ResolvedConfig) -> io::Result<Arc<dyn StatusProbe>> {
    let probe = HttpProbe::new(config.timeout).map_err(io::Error::other)?;
    Ok(Arc::new(probe))
}

/// Run one check against `config.url` in the terminal.
///
/// A failed check is a normal outcome and returns `Ok`. `Err` means the
/// terminal or the loop itself broke.
pub async fn run(config: ResolvedConfig) -> io::Result<()> {
    let probe = build_probe(&config)?;
    let mut session = Session::new(config.url.clone());

    let (width, _) = crossterm::terminal::size()?;
    let mut terminal = ratatui::try_init_with_options(TerminalOptions {
        viewport: Viewport::Inline(ui::viewport_height(&session, width)),
    })?;

    let result = event_loop(&mut session, probe, EventStream::new(), |session| {
        if session.phase() == Phase::Terminal {
            ui::draw_final(&mut terminal, session)
        } else {
            terminal.draw(|f| ui::draw_ui(f, session)).map(|_| ())
        }
    })
    .await;

    // Restore before reporting, so any error message lands on a sane terminal
    ratatui::try_restore()?;
    if let Err(ref e) = result {
        warn!("Display loop failed: {}", e);
    }
    result
}

/// Drive a session from `Initial` to `Terminal`.
///
/// `input` supplies terminal events, `render` draws the session. `render` is
/// called once after the check is spawned and once after shutdown; ignored
/// input does not trigger a redraw.
pub async fn event_loop<S, R>(
    session: &mut Session,
    probe: Arc<dyn StatusProbe>,
    input: S,
    mut render: R,
) -> io::Result<()>
where
    S: Stream<Item = io::Result<Event>>,
    R: FnMut(&Session) -> io::Result<()>,
{
    let mut input = std::pin::pin!(input);
    let mut input_open = true;

    // Capacity 1: the check reports exactly once
    let (tx, mut rx) = mpsc::channel::<Action>(1);
    if update(session, Action::Start) == Effect::SpawnCheck {
        spawn_check(probe, session.url().to_string(), tx);
    }

    render(session)?;

    loop {
        let action = tokio::select! {
            received = rx.recv() => match received {
                Some(action) => action,
                None => {
                    return Err(io::Error::other(
                        "status check ended without reporting a result",
                    ));
                }
            },
            next = input.next(), if input_open => match next {
                Some(Ok(event)) => match translate(&event) {
                    Some(TuiEvent::Interrupt) => Action::Interrupt,
                    None => continue,
                },
                Some(Err(e)) => return Err(e),
                None => {
                    debug!("Input stream closed, waiting on the check only");
                    input_open = false;
                    continue;
                }
            },
        };

        debug!("Event loop received: {:?}", action);
        if update(session, action) == Effect::Quit {
            break;
        }
    }

    render(session)
}

fn spawn_check(probe: Arc<dyn StatusProbe>, url: String, tx: mpsc::Sender<Action>) {
    info!("Spawning {} check for {}", probe.name(), url);
    tokio::spawn(async move {
        let action = match probe.check(&url).await {
            Ok(status) => Action::StatusReceived(status),
            Err(e) => Action::CheckFailed(e),
        };
        // The loop may already be gone after an interrupt
        if tx.send(action).await.is_err() {
            debug!("Check result for {} dropped: receiver gone", url);
        }
    });
}

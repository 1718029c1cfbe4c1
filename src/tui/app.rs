//! The run loop.
//!
//! One task owns the controller. Each iteration ticks it, paints the
//! result, then sleeps for the mode's tick interval or until input
//! arrives, whichever comes first.

use tokio::sync::mpsc;
use tracing::info;

use crate::Result;
use crate::clock::ClockSource;
use crate::controller::DisplayController;
use crate::quotes::QuoteProvider;

use super::event::Event;
use super::terminal::Tui;
use super::ui;

/// Outcome of the startup time sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncStatus {
    Synced,
    Skipped,
}

impl SyncStatus {
    /// Returns the display string shown on the matrix and status bar.
    pub fn label(&self) -> &'static str {
        match self {
            SyncStatus::Synced => "TIME OK",
            SyncStatus::Skipped => "TIME SKIP",
        }
    }
}

/// Drives `controller` until the operator quits.
///
/// # Errors
///
/// Returns [`TickertapeError::Io`](crate::TickertapeError::Io) if drawing
/// to the terminal fails.
pub async fn run<Q, C>(
    terminal: &mut Tui,
    controller: &mut DisplayController<Q, C>,
    sync: SyncStatus,
    mut events: mpsc::UnboundedReceiver<Event>,
) -> Result<()>
where
    Q: QuoteProvider,
    C: ClockSource,
{
    loop {
        if let Some(transition) = controller.tick().await {
            info!(
                from = transition.from.label(),
                to = transition.to.label(),
                "Display mode changed"
            );
        }

        terminal
            .draw(|frame| ui::render(frame, controller, sync))
            .map_err(|e| crate::TickertapeError::Io(format!("failed to draw: {e}")))?;

        tokio::select! {
            _ = tokio::time::sleep(controller.tick_interval()) => {}
            event = events.recv() => match event {
                Some(Event::Quit) | None => {
                    info!("Quit requested");
                    break;
                }
                // The next draw picks up the new size.
                Some(Event::Resize(..)) => {}
            },
        }
    }

    Ok(())
}

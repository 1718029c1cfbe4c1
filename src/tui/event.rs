//! Keyboard input for the run loop.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

/// Input the run loop reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The operator asked to exit.
    Quit,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
///
/// Events are only forwarded, never acted on here, so every state change
/// still happens on the run loop.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Event>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            let polled = tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await;

            let event = match polled {
                Ok(Some(CrosstermEvent::Key(key))) if is_quit(&key) => Event::Quit,
                Ok(Some(CrosstermEvent::Resize(w, h))) => Event::Resize(w, h),
                Ok(_) => continue,
                Err(_) => break,
            };

            if tx.send(event).is_err() {
                break;
            }
        }
    });
}

/// `q`, `Esc`, or `Ctrl-C`.
pub fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }
}

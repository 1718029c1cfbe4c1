//! Terminal rendering of the pixel matrix.
//!
//! Provides a Ratatui-based stand-in for the LED panel: the ticker strip is
//! painted glyph by glyph into a fixed-width row, with a status bar below.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::{SyncStatus, run};
pub use event::{Event, spawn_event_reader};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::{render, render_splash};

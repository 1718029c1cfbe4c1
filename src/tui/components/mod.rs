//! Reusable UI components.

pub mod matrix;
pub mod status_bar;

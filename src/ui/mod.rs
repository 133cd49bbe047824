//! Terminal rendering: paints the logical 576x1024 surface into a ratatui buffer.

pub mod canvas;
pub mod sprites;

pub use canvas::TerminalCanvas;

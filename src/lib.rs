//! Flappy - terminal Flappy Bird.
//!
//! The simulation (bird, pipes, scene, session) is independent of the
//! terminal; it draws through the [`render::Canvas`] it is handed. The
//! [`ui`] module supplies the ratatui-backed canvas used by the binary.

pub mod bird;
pub mod build_info;
pub mod clock;
pub mod config;
pub mod constants;
pub mod events;
pub mod geometry;
pub mod logging;
pub mod pipe;
pub mod render;
pub mod scene;
pub mod session;
pub mod ui;

pub use session::{Flow, Session, SessionState};

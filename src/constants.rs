//! Tuning constants for the simulation and the logical render surface.
//!
//! Every velocity below is a per-frame delta calibrated for `FPS`. The loop
//! runs a fixed logical tick, so nothing is scaled by elapsed time.

// Frame timing
pub const FPS: u64 = 60;
pub const PIPE_SPAWN_INTERVAL_MS: u64 = 1300;
pub const BIRD_ANIMATION_INTERVAL_MS: u64 = 200;

// Logical surface (pixels)
pub const SURFACE_WIDTH: f64 = 576.0;
pub const SURFACE_HEIGHT: f64 = 1024.0;
pub const FLOOR_HEIGHT: f64 = 125.0;
/// Bird bottom at or below this row counts as hitting the floor.
pub const FLOOR_THRESHOLD: f64 = 900.0;
/// Width of one floor tile; two tiles are drawn side by side.
pub const FLOOR_TILE_WIDTH: i32 = 576;

// Bird physics
pub const GRAVITY: f64 = 0.5;
pub const JUMP_IMPULSE: f64 = 10.0;
/// Degrees of tilt per unit of (negated) velocity.
pub const ROTATION_FACTOR: f64 = 2.0;
pub const BIRD_ORIGIN_X: f64 = 100.0;
pub const BIRD_ORIGIN_Y: f64 = 512.0;
pub const BIRD_WIDTH: f64 = 68.0;
pub const BIRD_HEIGHT: f64 = 48.0;

// Pipes
pub const PIPE_VELOCITY: f64 = 7.0;
pub const PIPE_HEIGHTS: [f64; 5] = [400.0, 500.0, 600.0, 700.0, 800.0];
pub const PIPE_GAP: f64 = 300.0;
pub const PIPE_SPAWN_X: f64 = 700.0;
pub const PIPE_WIDTH: f64 = 104.0;
pub const PIPE_HEIGHT: f64 = 640.0;
/// Pipes whose right edge passes this far beyond the left edge are dropped.
pub const OFFSCREEN_MARGIN: f64 = 10.0;

// Overlays
pub const MENU_X: f64 = 100.0;
pub const MENU_Y: f64 = 100.0;
pub const MENU_WIDTH: f64 = 368.0;
pub const MENU_HEIGHT: f64 = 534.0;
pub const SCORE_LABEL_Y: f64 = 50.0;
pub const HIGHSCORE_LABEL_Y: f64 = 800.0;

// Backdrop selection (local wall-clock hours)
pub const DAY_START_HOUR: u32 = 6;
pub const NIGHT_START_HOUR: u32 = 18;

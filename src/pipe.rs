//! Pipe pairs: a lower and an upper pipe separated by a fixed gap.

use crate::constants::{
    OFFSCREEN_MARGIN, PIPE_GAP, PIPE_HEIGHT, PIPE_HEIGHTS, PIPE_SPAWN_X, PIPE_VELOCITY,
    PIPE_WIDTH,
};
use crate::geometry::Rect;
use rand::Rng;

/// A single obstacle (top + bottom pipe with a gap between).
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Top edge of the lower pipe.
    pub gap_y: f64,
    pub lower: Rect,
    pub upper: Rect,
    /// Whether the bird has passed this pipe (for scoring).
    pub scored: bool,
}

impl Pipe {
    /// Spawn a pipe off the right edge with a randomly chosen gap height.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let gap_y = PIPE_HEIGHTS[rng.gen_range(0..PIPE_HEIGHTS.len())];
        Self::with_gap(gap_y)
    }

    pub fn with_gap(gap_y: f64) -> Self {
        Self {
            gap_y,
            lower: Rect::from_midtop(PIPE_SPAWN_X, gap_y, PIPE_WIDTH, PIPE_HEIGHT),
            upper: Rect::from_midbottom(PIPE_SPAWN_X, gap_y - PIPE_GAP, PIPE_WIDTH, PIPE_HEIGHT),
            scored: false,
        }
    }

    /// Scroll both pipes left by one frame's worth.
    pub fn move_left(&mut self) {
        self.lower.translate_x(-PIPE_VELOCITY);
        self.upper.translate_x(-PIPE_VELOCITY);
    }

    pub fn center_x(&self) -> f64 {
        self.upper.center_x()
    }

    pub fn is_offscreen(&self) -> bool {
        self.lower.right() < -OFFSCREEN_MARGIN
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        rect.intersects(&self.upper) || rect.intersects(&self.lower)
    }
}

//! The player's bird: gravity, jump impulses and wing animation.

use crate::constants::{
    BIRD_HEIGHT, BIRD_ORIGIN_X, BIRD_ORIGIN_Y, BIRD_WIDTH, GRAVITY, JUMP_IMPULSE,
    ROTATION_FACTOR,
};
use crate::geometry::Rect;

/// Wing position of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdFrame {
    Down,
    Mid,
    Up,
}

impl BirdFrame {
    /// Frames in animation order.
    pub const ALL: [BirdFrame; 3] = [BirdFrame::Down, BirdFrame::Mid, BirdFrame::Up];
}

/// Bird state. The horizontal position never changes; only `y` moves.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Vertical center in surface pixels (positive = downward).
    pub y: f64,
    /// Pixels per frame (positive = falling).
    pub velocity: f64,
    /// Index into [`BirdFrame::ALL`].
    pub frame_index: usize,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BIRD_ORIGIN_Y,
            velocity: 0.0,
            frame_index: 0,
        }
    }

    pub fn x(&self) -> f64 {
        BIRD_ORIGIN_X
    }

    /// One physics tick: velocity first, then position.
    pub fn fall(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    /// Replace the current velocity with an upward kick.
    pub fn jump(&mut self) {
        self.velocity = 0.0;
        self.velocity -= JUMP_IMPULSE;
    }

    pub fn animate(&mut self) {
        self.frame_index = (self.frame_index + 1) % BirdFrame::ALL.len();
    }

    pub fn frame(&self) -> BirdFrame {
        BirdFrame::ALL[self.frame_index % BirdFrame::ALL.len()]
    }

    /// Render tilt in degrees: positive = nose up while rising.
    pub fn rotation(&self) -> f64 {
        -self.velocity * ROTATION_FACTOR
    }

    pub fn reset(&mut self) {
        self.velocity = 0.0;
        self.y = BIRD_ORIGIN_Y;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.x(), self.y, BIRD_WIDTH, BIRD_HEIGHT)
    }
}

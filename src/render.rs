//! The drawing contract between the game and whatever surface displays it.
//!
//! Game objects never touch a terminal directly. They describe each frame as
//! a series of sprite and label draws against a [`Canvas`] they are handed,
//! in back-to-front order.

use crate::bird::BirdFrame;
use crate::geometry::Rect;
use crate::scene::Backdrop;

/// A visual asset the canvas knows how to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sprite {
    Backdrop(Backdrop),
    Floor,
    Bird {
        frame: BirdFrame,
        /// Tilt in degrees, positive = nose up.
        rotation: f64,
    },
    LowerPipe,
    UpperPipe,
    Menu,
}

/// A render target measured in logical surface pixels.
pub trait Canvas {
    /// Composite `sprite` so that it fills `rect`.
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);

    /// Draw a single line of text centered on (`cx`, `cy`).
    fn draw_label(&mut self, text: &str, cx: f64, cy: f64);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite(Sprite, Rect),
    Label(String, f64, f64),
}

/// Canvas that just remembers what was drawn. Lets a whole frame be
/// inspected without a display.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprites(&self) -> impl Iterator<Item = (&Sprite, &Rect)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Sprite(sprite, rect) => Some((sprite, rect)),
            DrawCall::Label(..) => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Label(text, ..) => Some(text.as_str()),
            DrawCall::Sprite(..) => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        self.calls.push(DrawCall::Sprite(sprite, rect));
    }

    fn draw_label(&mut self, text: &str, cx: f64, cy: f64) {
        self.calls.push(DrawCall::Label(text.to_string(), cx, cy));
    }
}

//! Cosmetic environment: the day/night backdrop and the scrolling floor.

use crate::constants::{
    DAY_START_HOUR, FLOOR_HEIGHT, FLOOR_TILE_WIDTH, NIGHT_START_HOUR, SURFACE_HEIGHT,
    SURFACE_WIDTH,
};
use crate::geometry::Rect;
use crate::render::{Canvas, Sprite};
use chrono::{Local, Timelike};

/// Background image variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Day,
    Night,
}

impl Backdrop {
    /// Day from 06:00 up to (not including) 18:00, night otherwise.
    pub fn for_hour(hour: u32) -> Self {
        if (DAY_START_HOUR..NIGHT_START_HOUR).contains(&hour) {
            Self::Day
        } else {
            Self::Night
        }
    }
}

/// When the backdrop looks at the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackdropMode {
    /// Sample the hour once when the scene is built.
    #[default]
    Static,
    /// Sample the hour every frame.
    Dynamic,
}

/// Current local hour (0-23).
pub fn local_hour() -> u32 {
    Local::now().hour()
}

#[derive(Debug, Clone)]
pub struct Scene {
    /// Left edge of the first floor tile. Runs from 0 down past `-FLOOR_TILE_WIDTH`.
    pub floor_offset: i32,
    mode: BackdropMode,
    captured: Backdrop,
    clock: fn() -> u32,
}

impl Scene {
    pub fn new(mode: BackdropMode) -> Self {
        Self::with_clock(mode, local_hour)
    }

    /// Build a scene that reads the hour from `clock` instead of the system.
    pub fn with_clock(mode: BackdropMode, clock: fn() -> u32) -> Self {
        Self {
            floor_offset: 0,
            mode,
            captured: Backdrop::for_hour(clock()),
            clock,
        }
    }

    pub fn mode(&self) -> BackdropMode {
        self.mode
    }

    pub fn backdrop(&self) -> Backdrop {
        match self.mode {
            BackdropMode::Static => self.captured,
            BackdropMode::Dynamic => Backdrop::for_hour((self.clock)()),
        }
    }

    /// Advance the floor by one pixel, wrapping once a full tile has gone by.
    pub fn scroll_floor(&mut self) {
        if self.floor_offset < -FLOOR_TILE_WIDTH {
            self.floor_offset = 0;
        }
        self.floor_offset -= 1;
    }

    pub fn draw_background<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_sprite(
            Sprite::Backdrop(self.backdrop()),
            Rect::new(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT),
        );
    }

    pub fn draw_floor<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let top = SURFACE_HEIGHT - FLOOR_HEIGHT;
        let width = FLOOR_TILE_WIDTH as f64;
        let x = self.floor_offset as f64;
        canvas.draw_sprite(Sprite::Floor, Rect::new(x, top, width, FLOOR_HEIGHT));
        canvas.draw_sprite(Sprite::Floor, Rect::new(x + width, top, width, FLOOR_HEIGHT));
    }
}

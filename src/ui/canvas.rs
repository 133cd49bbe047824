//! [`Canvas`] implementation over a ratatui [`Buffer`].

use super::sprites::{self, CellContext};
use crate::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::geometry::Rect;
use crate::render::{Canvas, Sprite};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as Area;
use ratatui::style::{Color, Modifier, Style};
use std::ops::Range;

/// Text printed over the menu panel, as (line, vertical position within panel).
const MENU_LINES: [(&str, f64); 4] = [
    ("GET READY", 0.2),
    ("Click or Enter to start", 0.5),
    ("Space to flap", 0.65),
    ("Q to quit", 0.8),
];

/// Scales logical surface pixels onto the cells of `area`.
pub struct TerminalCanvas<'a> {
    buf: &'a mut Buffer,
    area: Area,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Area) -> Self {
        // Never paint outside the buffer itself
        let area = area.intersection(buf.area);
        Self { buf, area }
    }

    fn scale_x(&self) -> f64 {
        self.area.width as f64 / SURFACE_WIDTH
    }

    fn scale_y(&self) -> f64 {
        self.area.height as f64 / SURFACE_HEIGHT
    }

    /// Cells covered by the pixel span `start..end` along one axis.
    fn span(start: f64, end: f64, scale: f64, origin: u16, len: u16) -> Range<u16> {
        let first = (start * scale).floor().max(0.0);
        let last = (end * scale).ceil().min(len as f64);
        if last <= first {
            return origin..origin;
        }
        (origin + first as u16)..(origin + last as u16)
    }

    /// Cell containing the logical point, if it is on screen.
    fn cell_at(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let col = (x * self.scale_x()).floor();
        let row = (y * self.scale_y()).floor();
        if col < 0.0 || row < 0.0 || col >= self.area.width as f64 || row >= self.area.height as f64
        {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }
}

impl Canvas for TerminalCanvas<'_> {
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        if self.area.width == 0 || self.area.height == 0 {
            return;
        }
        let (sx, sy) = (self.scale_x(), self.scale_y());
        let cols = Self::span(rect.left(), rect.right(), sx, self.area.x, self.area.width);
        let rows = Self::span(rect.top(), rect.bottom(), sy, self.area.y, self.area.height);
        let center = self.cell_at(rect.center_x(), rect.center_y());

        for row in rows {
            let y = ((row - self.area.y) as f64 + 0.5) / sy;
            for col in cols.clone() {
                let x = ((col - self.area.x) as f64 + 0.5) / sx;
                let ctx = CellContext {
                    local_x: x - rect.left(),
                    local_y: y - rect.top(),
                    width: rect.width,
                    height: rect.height,
                    col,
                    row,
                    is_center: center == Some((col, row)),
                };
                sprites::paint(sprite, &ctx, self.buf.get_mut(col, row));
            }
        }

        if sprite == Sprite::Menu {
            for (line, fraction) in MENU_LINES {
                self.draw_label(line, rect.center_x(), rect.top() + rect.height * fraction);
            }
        }
    }

    fn draw_label(&mut self, text: &str, cx: f64, cy: f64) {
        let Some((col, row)) = self.cell_at(cx, cy) else {
            return;
        };
        let half = (text.chars().count() / 2) as u16;
        let start = col.saturating_sub(half).max(self.area.x);
        let width = (self.area.right() - start) as usize;
        self.buf.set_stringn(
            start,
            row,
            text,
            width,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FLOOR_HEIGHT;
    use crate::scene::Backdrop;

    fn row_text(buf: &Buffer, row: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|col| buf.get(col, row).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_backdrop_fills_area() {
        let area = Area::new(0, 0, 48, 32);
        let mut buf = Buffer::empty(area);
        let mut canvas = TerminalCanvas::new(&mut buf, area);
        canvas.draw_sprite(
            Sprite::Backdrop(Backdrop::Day),
            Rect::new(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT),
        );
        for row in 0..32 {
            for col in 0..48 {
                assert_eq!(buf.get(col, row).bg, sprites::SKY_DAY);
            }
        }
    }

    #[test]
    fn test_offscreen_sprite_is_clipped() {
        let area = Area::new(0, 0, 48, 32);
        let mut buf = Buffer::empty(area);
        let mut canvas = TerminalCanvas::new(&mut buf, area);
        canvas.draw_sprite(Sprite::LowerPipe, Rect::new(-500.0, 400.0, 104.0, 640.0));
        canvas.draw_sprite(Sprite::LowerPipe, Rect::new(900.0, 400.0, 104.0, 640.0));
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_floor_occupies_bottom_rows() {
        let area = Area::new(0, 0, 48, 32);
        let mut buf = Buffer::empty(area);
        let mut canvas = TerminalCanvas::new(&mut buf, area);
        let top = SURFACE_HEIGHT - FLOOR_HEIGHT;
        canvas.draw_sprite(Sprite::Floor, Rect::new(0.0, top, SURFACE_WIDTH, FLOOR_HEIGHT));
        assert_eq!(buf.get(10, 31).bg, sprites::DIRT);
        assert_eq!(buf.get(10, 0).bg, Color::Reset);
    }

    #[test]
    fn test_label_centered_on_point() {
        let area = Area::new(0, 0, 48, 32);
        let mut buf = Buffer::empty(area);
        let mut canvas = TerminalCanvas::new(&mut buf, area);
        canvas.draw_label("Score: 3", SURFACE_WIDTH / 2.0, 50.0);
        let text = row_text(&buf, 1);
        assert_eq!(text.trim(), "Score: 3");
        assert_eq!(text.find('S'), Some(20));
    }

    #[test]
    fn test_label_off_surface_is_dropped() {
        let area = Area::new(0, 0, 48, 32);
        let mut buf = Buffer::empty(area);
        let mut canvas = TerminalCanvas::new(&mut buf, area);
        canvas.draw_label("Score: 3", SURFACE_WIDTH / 2.0, SURFACE_HEIGHT + 10.0);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_bird_center_glyph() {
        let area = Area::new(0, 0, 48, 32);
        let mut buf = Buffer::empty(area);
        let mut canvas = TerminalCanvas::new(&mut buf, area);
        canvas.draw_sprite(
            Sprite::Bird {
                frame: crate::bird::BirdFrame::Mid,
                rotation: 20.0,
            },
            Rect::from_center(100.0, 512.0, 68.0, 48.0),
        );
        // 100 * 48/576 = 8.33, 512 * 32/1024 = 16
        assert_eq!(buf.get(8, 16).symbol(), "▲");
        assert_eq!(buf.get(8, 16).bg, sprites::BIRD);
    }

    #[test]
    fn test_menu_prints_instructions() {
        let area = Area::new(0, 0, 60, 40);
        let mut buf = Buffer::empty(area);
        let mut canvas = TerminalCanvas::new(&mut buf, area);
        canvas.draw_sprite(Sprite::Menu, Rect::new(100.0, 100.0, 368.0, 534.0));
        let all: String = (0..40).map(|row| row_text(&buf, row)).collect();
        assert!(all.contains("GET READY"));
        assert!(all.contains("Space to flap"));
    }
}

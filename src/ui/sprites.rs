//! Per-cell appearance of each sprite.

use crate::bird::BirdFrame;
use crate::render::Sprite;
use crate::scene::Backdrop;
use ratatui::buffer::Cell;
use ratatui::style::Color;

pub const SKY_DAY: Color = Color::Rgb(78, 192, 202);
pub const SKY_NIGHT: Color = Color::Rgb(14, 36, 66);
pub const STAR: Color = Color::Rgb(230, 230, 200);
pub const GRASS: Color = Color::Rgb(115, 191, 46);
pub const DIRT: Color = Color::Rgb(222, 216, 149);
pub const DIRT_DARK: Color = Color::Rgb(200, 180, 110);
pub const PIPE: Color = Color::Rgb(100, 170, 40);
pub const PIPE_SHADE: Color = Color::Rgb(74, 122, 26);
pub const PIPE_SHINE: Color = Color::Rgb(145, 215, 62);
pub const PIPE_CAP: Color = Color::Rgb(60, 100, 20);
pub const BIRD: Color = Color::Rgb(245, 200, 66);
pub const BIRD_INK: Color = Color::Rgb(20, 20, 20);
pub const MENU: Color = Color::Rgb(225, 120, 40);

/// Height of the grass strip on top of the floor, in pixels.
const GRASS_DEPTH: f64 = 18.0;
/// Width of one diagonal floor stripe, in pixels.
const STRIPE_WIDTH: f64 = 24.0;
/// Height of the lip at the open end of a pipe, in pixels.
const CAP_DEPTH: f64 = 48.0;

/// Where a terminal cell falls inside the sprite being painted.
#[derive(Debug, Clone, Copy)]
pub struct CellContext {
    /// Pixel offset of the cell center from the sprite's top-left corner.
    pub local_x: f64,
    pub local_y: f64,
    pub width: f64,
    pub height: f64,
    /// Terminal column/row, for patterns fixed to the screen.
    pub col: u16,
    pub row: u16,
    /// This cell contains the sprite's center point.
    pub is_center: bool,
}

pub fn paint(sprite: Sprite, ctx: &CellContext, cell: &mut Cell) {
    match sprite {
        Sprite::Backdrop(Backdrop::Day) => {
            cell.set_symbol(" ").set_bg(SKY_DAY);
        }
        Sprite::Backdrop(Backdrop::Night) => {
            let star = (ctx.col as u32 * 7 + ctx.row as u32 * 13) % 29 == 0;
            cell.set_symbol(if star { "·" } else { " " })
                .set_fg(STAR)
                .set_bg(SKY_NIGHT);
        }
        Sprite::Floor => paint_floor(ctx, cell),
        Sprite::LowerPipe => paint_pipe(ctx, ctx.local_y < CAP_DEPTH, cell),
        Sprite::UpperPipe => paint_pipe(ctx, ctx.local_y > ctx.height - CAP_DEPTH, cell),
        Sprite::Bird { frame, rotation } => paint_bird(ctx, frame, rotation, cell),
        Sprite::Menu => {
            cell.set_symbol(" ").set_bg(MENU);
        }
    }
}

fn paint_floor(ctx: &CellContext, cell: &mut Cell) {
    if ctx.local_y < GRASS_DEPTH {
        cell.set_symbol(" ").set_bg(GRASS);
        return;
    }
    let stripe = (ctx.local_x / STRIPE_WIDTH).floor() as i64;
    let symbol = if stripe.rem_euclid(2) == 0 { "╱" } else { " " };
    cell.set_symbol(symbol).set_fg(DIRT_DARK).set_bg(DIRT);
}

fn paint_pipe(ctx: &CellContext, is_cap: bool, cell: &mut Cell) {
    let bg = if is_cap {
        PIPE_CAP
    } else if ctx.local_x < ctx.width * 0.2 {
        PIPE_SHADE
    } else if ctx.local_x > ctx.width * 0.7 {
        PIPE_SHINE
    } else {
        PIPE
    };
    cell.set_symbol(" ").set_bg(bg);
}

/// Glyph for the bird's body, tilted by the render rotation.
pub fn bird_glyph(rotation: f64) -> &'static str {
    if rotation > 5.0 {
        "▲"
    } else if rotation < -10.0 {
        "▼"
    } else {
        "►"
    }
}

pub fn wing_glyph(frame: BirdFrame) -> &'static str {
    match frame {
        BirdFrame::Down => "▾",
        BirdFrame::Mid => "─",
        BirdFrame::Up => "▴",
    }
}

fn paint_bird(ctx: &CellContext, frame: BirdFrame, rotation: f64, cell: &mut Cell) {
    let symbol = if ctx.is_center {
        bird_glyph(rotation)
    } else if ctx.local_x < ctx.width / 3.0
        && (ctx.local_y - ctx.height / 2.0).abs() < ctx.height / 4.0
    {
        wing_glyph(frame)
    } else {
        " "
    };
    cell.set_symbol(symbol).set_fg(BIRD_INK).set_bg(BIRD);
}

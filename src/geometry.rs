//! Axis-aligned rectangles in logical surface pixels.

/// An axis-aligned box. `x`/`y` is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    /// Rect whose top edge midpoint sits at (`cx`, `top`).
    pub fn from_midtop(cx: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, top, width, height)
    }

    /// Rect whose bottom edge midpoint sits at (`cx`, `bottom`).
    pub fn from_midbottom(cx: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, bottom - height, width, height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn translate_x(&mut self, dx: f64) {
        self.x += dx;
    }

    /// True if the interiors overlap. Rects that only share an edge do not.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_constructors() {
        let r = Rect::from_center(100.0, 512.0, 68.0, 48.0);
        assert_eq!(r.left(), 66.0);
        assert_eq!(r.top(), 488.0);
        assert_eq!(r.bottom(), 536.0);

        let top = Rect::from_midtop(700.0, 400.0, 104.0, 640.0);
        assert_eq!(top.top(), 400.0);
        assert_eq!(top.center_x(), 700.0);

        let bottom = Rect::from_midbottom(700.0, 100.0, 104.0, 640.0);
        assert_eq!(bottom.bottom(), 100.0);
        assert_eq!(bottom.center_x(), 700.0);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&Rect::new(2.0, 2.0, 2.0, 2.0)));
        assert!(!a.intersects(&Rect::new(20.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }
}

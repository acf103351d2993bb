//! Plain geometry types shared by the layout and the platform layer.
//!
//! Orientation-agnostic: the ring uses them in a y-down overlay space,
//! window placement uses them in Cocoa's y-up screen space.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rect of `size` whose center is `center`.
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Half-open containment: the max edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x < self.max_x() && p.y >= self.min_y() && p.y < self.max_y()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// Same center, each edge moved inwards by `d` (outwards when negative).
    pub fn inset_by(&self, d: f64) -> Self {
        Self::new(
            Point::new(self.origin.x + d, self.origin.y + d),
            Size::new(self.size.width - 2.0 * d, self.size.height - 2.0 * d),
        )
    }

    /// Shift this rect the least amount needed to lie inside `bounds`.
    ///
    /// If it is larger than `bounds` along an axis it is centered on that axis.
    pub fn clamped_into(&self, bounds: &Rect) -> Self {
        fn axis(origin: f64, len: f64, lo: f64, bound_len: f64) -> f64 {
            if len >= bound_len {
                lo + (bound_len - len) / 2.0
            } else {
                origin.max(lo).min(lo + bound_len - len)
            }
        }
        Self::new(
            Point::new(
                axis(self.origin.x, self.size.width, bounds.origin.x, bounds.size.width),
                axis(self.origin.y, self.size.height, bounds.origin.y, bounds.size.height),
            ),
            self.size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_has_that_center() {
        let r = Rect::centered_at(Point::new(10.0, 20.0), Size::new(4.0, 6.0));
        assert_eq!(r.origin, Point::new(8.0, 17.0));
        assert_eq!(r.center(), Point::new(10.0, 20.0));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.9, 9.9)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b = Rect::new(Point::new(10.0, 0.0), Size::new(10.0, 10.0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&a.inset_by(2.0)));
    }

    #[test]
    fn clamp_moves_rect_back_on_screen() {
        let screen = Rect::new(Point::new(0.0, 0.0), Size::new(1440.0, 900.0));
        let r = Rect::centered_at(Point::new(5.0, 890.0), Size::new(200.0, 200.0));
        let c = r.clamped_into(&screen);
        assert_eq!(c.origin, Point::new(0.0, 700.0));
        assert_eq!(c.size, r.size);
    }

    #[test]
    fn clamp_centers_oversized_rect() {
        let screen = Rect::new(Point::new(100.0, 0.0), Size::new(300.0, 300.0));
        let r = Rect::new(Point::new(0.0, 0.0), Size::new(500.0, 100.0));
        let c = r.clamped_into(&screen);
        assert_eq!(c.origin.x, 0.0);
        assert_eq!(c.origin.y, 0.0);
    }
}

//! Ring geometry: where each icon goes and how big the overlay must be.
//!
//! All coordinates are in overlay space: origin at the top-left of the
//! overlay, y growing downwards. Icon 0 sits to the right of the center and
//! the ring proceeds clockwise on screen.

use std::f64::consts::{PI, TAU};

use super::geometry::{Point, Rect, Size};

/// Layout of `count` square icons evenly spaced on a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    count: usize,
    icon_size: f64,
    margin: f64,
    radius: f64,
    label_height: f64,
}

impl RingLayout {
    /// Lay out `count` icons of edge `icon_size`.
    ///
    /// The radius is `requested_radius`, grown to [`RingLayout::min_radius`]
    /// when that is too small for neighbours to keep `margin` between them.
    pub fn new(count: usize, icon_size: f64, requested_radius: f64, margin: f64) -> Self {
        let icon_size = icon_size.max(0.0);
        let margin = margin.max(0.0);
        let radius = requested_radius
            .max(0.0)
            .max(Self::min_radius(count, icon_size, margin));
        Self {
            count,
            icon_size,
            margin,
            radius,
            label_height: 0.0,
        }
    }

    /// Reserve `height` under every icon for its name.
    pub fn with_labels(mut self, height: f64) -> Self {
        self.label_height = height.max(0.0);
        self
    }

    /// Smallest radius at which adjacent icon centers are `icon_size + margin` apart.
    ///
    /// `(icon_size + margin) / (2·sin(π/N))`; zero for a single icon or none.
    pub fn min_radius(count: usize, icon_size: f64, margin: f64) -> f64 {
        if count <= 1 {
            return 0.0;
        }
        (icon_size + margin) / (2.0 * (PI / count as f64).sin())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn icon_size(&self) -> f64 {
        self.icon_size
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Radius actually used.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn label_height(&self) -> f64 {
        self.label_height
    }

    /// Angle of icon `index` in radians, `index / count · 2π`.
    pub fn angle(&self, index: usize) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        index as f64 / self.count as f64 * TAU
    }

    /// Offset of icon `index` from the ring center.
    pub fn offset(&self, index: usize) -> Point {
        let theta = self.angle(index);
        Point::new(self.radius * theta.cos(), self.radius * theta.sin())
    }

    /// Offsets of every icon, in ring order.
    pub fn offsets(&self) -> Vec<Point> {
        (0..self.count).map(|i| self.offset(i)).collect()
    }

    /// Size of the overlay that fits the whole ring.
    pub fn extent(&self) -> Size {
        let side = 2.0 * (self.radius + self.icon_size / 2.0 + self.margin);
        Size::new(side, side + 2.0 * self.label_height)
    }

    /// Ring center in overlay space.
    pub fn center(&self) -> Point {
        let e = self.extent();
        Point::new(e.width / 2.0, e.height / 2.0)
    }

    /// Center of icon `index` in overlay space.
    pub fn icon_center(&self, index: usize) -> Point {
        let c = self.center();
        let o = self.offset(index);
        Point::new(c.x + o.x, c.y + o.y)
    }

    /// Square occupied by icon `index` in overlay space.
    pub fn icon_rect(&self, index: usize) -> Rect {
        Rect::centered_at(
            self.icon_center(index),
            Size::new(self.icon_size, self.icon_size),
        )
    }

    /// Band under icon `index` where its name is drawn.
    pub fn label_rect(&self, index: usize) -> Rect {
        let icon = self.icon_rect(index);
        let width = self.icon_size + self.margin * 2.0;
        Rect::new(
            Point::new(icon.center().x - width / 2.0, icon.max_y()),
            Size::new(width, self.label_height),
        )
    }

    /// Region of overlay space to show in a view of `view` size so the
    /// whole ring fits, centered and undistorted. Never magnifies.
    pub fn preview_bounds(&self, view: Size) -> Rect {
        let extent = self.extent();
        let scale = if extent.width <= 0.0 || extent.height <= 0.0 {
            1.0
        } else {
            (view.width / extent.width)
                .min(view.height / extent.height)
                .min(1.0)
        };
        let size = if scale > 0.0 {
            Size::new(view.width / scale, view.height / scale)
        } else {
            extent
        };
        Rect::centered_at(self.center(), size)
    }

    /// Icon under `p` (overlay space), if any.
    ///
    /// Spacing is measured between centers, so the corners of diagonal
    /// neighbours can overlap; the icon whose center is nearest wins.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        (0..self.count)
            .filter(|&i| self.icon_rect(i).contains(p))
            .min_by(|&a, &b| {
                let da = self.icon_center(a).distance_to(p);
                let db = self.icon_center(b).distance_to(p);
                da.total_cmp(&db)
            })
    }
}

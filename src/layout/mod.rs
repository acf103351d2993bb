//! Pure geometry for the launcher ring.

pub mod geometry;
pub mod ring;

pub use geometry::{Point, Rect, Size};
pub use ring::RingLayout;

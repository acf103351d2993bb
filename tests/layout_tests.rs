//! Tests for ring geometry.

use std::f64::consts::PI;

use tapthatapp::model::constants::*;
use tapthatapp::{Point, RingLayout, Size};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn default_ring(count: usize) -> RingLayout {
    RingLayout::new(count, DEFAULT_ICON_SIZE, DEFAULT_RING_RADIUS, RING_MARGIN)
}

// === Offsets ===

#[test]
fn first_icon_sits_at_angle_zero() {
    let p = default_ring(4).offset(0);
    assert!(approx_eq(p.x, 160.0));
    assert!(approx_eq(p.y, 0.0));
}

#[test]
fn third_of_four_icons_is_opposite() {
    let p = default_ring(4).offset(2);
    assert!(approx_eq(p.x, -160.0));
    assert!(approx_eq(p.y, 0.0));
}

#[test]
fn offsets_are_in_index_order_on_the_circle() {
    let ring = default_ring(7);
    let offsets = ring.offsets();
    assert_eq!(offsets.len(), 7);
    for (i, p) in offsets.iter().enumerate() {
        assert!(approx_eq(p.distance_to(Point::default()), ring.radius()));
        assert!(approx_eq(ring.angle(i), i as f64 / 7.0 * 2.0 * PI));
    }
}

#[test]
fn single_icon_uses_requested_radius() {
    let ring = default_ring(1);
    assert!(approx_eq(ring.radius(), DEFAULT_RING_RADIUS));
    assert!(approx_eq(ring.offset(0).x, DEFAULT_RING_RADIUS));
}

#[test]
fn empty_ring_has_no_offsets() {
    assert!(default_ring(0).offsets().is_empty());
}

// === Radius ===

#[test]
fn crowded_ring_grows_past_requested_radius() {
    let ring = RingLayout::new(30, 48.0, 40.0, 16.0);
    let expected = (48.0 + 16.0) / (2.0 * (PI / 30.0).sin());
    assert!(approx_eq(ring.radius(), expected));
}

#[test]
fn neighbours_never_get_closer_than_size_plus_margin() {
    for count in 2..=40 {
        let ring = RingLayout::new(count, 56.0, 100.0, 16.0);
        let offsets = ring.offsets();
        for i in 0..count {
            for j in (i + 1)..count {
                assert!(offsets[i].distance_to(offsets[j]) >= 56.0 + 16.0 - 1e-6);
            }
        }
    }
}

// === Extent ===

#[test]
fn extent_covers_ring_and_margin() {
    assert_eq!(default_ring(4).extent(), Size::new(400.0, 400.0));
}

#[test]
fn labels_make_extent_taller() {
    let ring = default_ring(4).with_labels(LABEL_HEIGHT);
    let extent = ring.extent();
    assert!(approx_eq(extent.width, 400.0));
    assert!(approx_eq(extent.height, 400.0 + 2.0 * LABEL_HEIGHT));
}

#[test]
fn every_icon_fits_inside_extent() {
    let ring = default_ring(9).with_labels(LABEL_HEIGHT);
    let extent = ring.extent();
    for i in 0..9 {
        let r = ring.icon_rect(i);
        assert!(r.min_x() >= 0.0 && r.max_x() <= extent.width);
        assert!(r.min_y() >= 0.0 && r.max_y() <= extent.height);
    }
}

// === Hit testing ===

#[test]
fn clicking_icon_center_hits_it() {
    let ring = default_ring(6);
    for i in 0..6 {
        assert_eq!(ring.hit_test(ring.icon_center(i)), Some(i));
    }
}

#[test]
fn clicking_ring_center_hits_nothing() {
    let ring = default_ring(6);
    assert_eq!(ring.hit_test(ring.center()), None);
}

/// Largest icon preset on the smallest radius preset, and the reverse.
fn preset_extremes() -> Vec<(f64, f64)> {
    let icons = [ICON_SIZE_PRESETS[0].1, ICON_SIZE_PRESETS[4].1];
    let radii = [RING_RADIUS_PRESETS[0].1, RING_RADIUS_PRESETS[4].1];
    icons
        .iter()
        .flat_map(|&size| radii.iter().map(move |&radius| (size, radius)))
        .collect()
}

#[test]
fn squares_that_overlap_resolve_to_the_nearest_center() {
    let mut overlaps_seen = 0;
    for (size, radius) in preset_extremes() {
        for count in 2..=16 {
            let ring = RingLayout::new(count, size, radius, RING_MARGIN);
            for i in 0..count {
                for j in (i + 1)..count {
                    let a = ring.icon_rect(i);
                    let b = ring.icon_rect(j);
                    if !a.intersects(&b) {
                        continue;
                    }
                    overlaps_seen += 1;

                    let lo = Point::new(a.min_x().max(b.min_x()), a.min_y().max(b.min_y()));
                    let hi = Point::new(a.max_x().min(b.max_x()), a.max_y().min(b.max_y()));
                    let mut samples = vec![Point::new((lo.x + hi.x) / 2.0, (lo.y + hi.y) / 2.0)];
                    if hi.x - lo.x > 1.0 && hi.y - lo.y > 1.0 {
                        samples.extend([
                            Point::new(lo.x + 0.25, lo.y + 0.25),
                            Point::new(hi.x - 0.25, hi.y - 0.25),
                            Point::new(lo.x + 0.25, hi.y - 0.25),
                            Point::new(hi.x - 0.25, lo.y + 0.25),
                        ]);
                    }
                    for p in samples {
                        let hit = ring.hit_test(p).expect("point lies in two icons");
                        let d_hit = ring.icon_center(hit).distance_to(p);
                        let d_i = ring.icon_center(i).distance_to(p);
                        let d_j = ring.icon_center(j).distance_to(p);
                        assert!(d_hit <= d_i.min(d_j) + 1e-9, "count {count} pair ({i}, {j})");
                    }
                }
            }
        }
    }
    // XL icons on the XS radius do overlap at the corners
    assert!(overlaps_seen > 0);
}

#[test]
fn squares_never_overlap_with_default_settings() {
    for count in 2..=8 {
        let ring = default_ring(count);
        for i in 0..count {
            for j in (i + 1)..count {
                assert!(!ring.icon_rect(i).intersects(&ring.icon_rect(j)));
            }
        }
    }
}

// === Preview ===

#[test]
fn preview_shrinks_large_ring_to_fit() {
    let ring = RingLayout::new(8, 64.0, 220.0, RING_MARGIN);
    let view = Size::new(260.0, 220.0);
    let bounds = ring.preview_bounds(view);
    let extent = ring.extent();

    // Whole ring visible, same aspect ratio as the view
    assert!(bounds.size.width >= extent.width - 1e-6);
    assert!(bounds.size.height >= extent.height - 1e-6);
    assert!(approx_eq(
        bounds.size.width / bounds.size.height,
        view.width / view.height
    ));
    assert!(approx_eq(bounds.center().x, ring.center().x));
    assert!(approx_eq(bounds.center().y, ring.center().y));
}

#[test]
fn preview_never_magnifies_small_ring() {
    let ring = RingLayout::new(2, 32.0, 40.0, RING_MARGIN);
    let view = Size::new(600.0, 500.0);
    let bounds = ring.preview_bounds(view);
    assert!(approx_eq(bounds.size.width, 600.0));
    assert!(approx_eq(bounds.size.height, 500.0));
}

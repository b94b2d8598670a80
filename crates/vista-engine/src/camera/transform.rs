//! Pure world ↔ screen conversions.
//!
//! Every function takes the camera state explicitly (`cam_pos`, `zoom`,
//! `view_size` in world units) so they can be tested without a `Camera`.

use crate::coords::{Rect, Vec2};

/// Maps a world point to screen pixels. `cam_pos` lands on the viewport centre.
#[inline]
pub fn world_to_screen(cam_pos: Vec2, zoom: f32, view_size: Vec2, p: Vec2) -> Vec2 {
    (p + view_size / 2.0 - cam_pos) * zoom
}

/// Exact inverse of [`world_to_screen`].
#[inline]
pub fn screen_to_world(cam_pos: Vec2, zoom: f32, view_size: Vec2, s: Vec2) -> Vec2 {
    s / zoom - view_size / 2.0 + cam_pos
}

/// Maps a world rectangle to screen pixels.
#[inline]
pub fn rect_to_screen(cam_pos: Vec2, zoom: f32, view_size: Vec2, rect: Rect) -> Rect {
    Rect::from_origin_size(world_to_screen(cam_pos, zoom, view_size, rect.origin), rect.size * zoom)
}

/// Maps a world circle to a screen centre and radius.
#[inline]
pub fn circle_to_screen(
    cam_pos: Vec2,
    zoom: f32,
    view_size: Vec2,
    center: Vec2,
    radius: f32,
) -> (Vec2, f32) {
    (world_to_screen(cam_pos, zoom, view_size, center), radius * zoom)
}

/// The world rectangle covered by a view of `view_size` centred at `cam_pos`.
#[inline]
pub fn view_rect(cam_pos: Vec2, view_size: Vec2) -> Rect {
    Rect::from_center(cam_pos, view_size)
}

/// Inclusive overlap between a world rectangle and the view.
///
/// A rectangle that only touches the view edge counts as visible.
#[inline]
pub fn rect_in_view(cam_pos: Vec2, view_size: Vec2, rect: Rect) -> bool {
    view_rect(cam_pos, view_size).overlaps_inclusive(rect)
}

/// Inclusive overlap between a circle's bounding box and the view.
#[inline]
pub fn circle_in_view(cam_pos: Vec2, view_size: Vec2, center: Vec2, radius: f32) -> bool {
    let r = radius.abs();
    rect_in_view(cam_pos, view_size, Rect::from_center(center, Vec2::splat(2.0 * r)))
}

/// Bounding rectangle of a point set. `None` for an empty set.
pub fn points_bounds(points: &[Vec2]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let (min, max) = rest
        .iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
    Some(Rect::from_corners(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    // ── world_to_screen ───────────────────────────────────────────────────

    #[test]
    fn camera_position_maps_to_screen_center() {
        let view = Vec2::new(400.0, 300.0);
        let cam = Vec2::new(12.0, -7.0);
        let s = world_to_screen(cam, 2.0, view, cam);
        assert_eq!(s, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn world_origin_at_zoom_one_centered_camera() {
        let s = world_to_screen(Vec2::zero(), 1.0, Vec2::new(800.0, 600.0), Vec2::zero());
        assert_eq!(s, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn world_to_screen_scales_offsets_by_zoom() {
        // 800x600 viewport at zoom 4 → 200x150 world view.
        let view = Vec2::new(200.0, 150.0);
        let s = world_to_screen(Vec2::zero(), 4.0, view, Vec2::new(10.0, 5.0));
        assert_eq!(s, Vec2::new(440.0, 320.0));
    }

    // ── screen_to_world ───────────────────────────────────────────────────

    #[test]
    fn screen_origin_is_view_top_left() {
        let view = Vec2::new(100.0, 50.0);
        let cam = Vec2::new(30.0, 40.0);
        let w = screen_to_world(cam, 8.0, view, Vec2::zero());
        assert_eq!(w, Vec2::new(-20.0, 15.0));
    }

    #[test]
    fn round_trip_world_first() {
        let cases = [
            (Vec2::zero(), 1.0, Vec2::new(800.0, 600.0), Vec2::new(3.5, -2.0)),
            (Vec2::new(50.0, -30.0), 2.0, Vec2::new(400.0, 300.0), Vec2::new(100.0, 200.0)),
            (Vec2::new(-13.7, 42.3), 16.0, Vec2::new(50.0, 37.5), Vec2::new(-333.3, 999.9)),
            (Vec2::new(1e3, 1e3), 1024.0, Vec2::new(0.78125, 0.5859375), Vec2::new(1000.1, 999.8)),
        ];
        for (cam, zoom, view, p) in cases {
            let back = screen_to_world(cam, zoom, view, world_to_screen(cam, zoom, view, p));
            assert!(approx(back, p), "{p:?} came back as {back:?}");
        }
    }

    #[test]
    fn round_trip_screen_first() {
        let cam = Vec2::new(10.0, 20.0);
        let view = Vec2::new(200.0, 150.0);
        let s = Vec2::new(400.0, 300.0);
        let back = world_to_screen(cam, 4.0, view, screen_to_world(cam, 4.0, view, s));
        assert!(approx(back, s));
    }

    // ── culling ───────────────────────────────────────────────────────────

    #[test]
    fn rect_touching_view_edge_is_visible() {
        // View spans x in [-50, 50], y in [-25, 25].
        let view = Vec2::new(100.0, 50.0);
        assert!(rect_in_view(Vec2::zero(), view, Rect::new(50.0, 0.0, 10.0, 10.0)));
        assert!(rect_in_view(Vec2::zero(), view, Rect::new(-60.0, 0.0, 10.0, 10.0)));
        assert!(rect_in_view(Vec2::zero(), view, Rect::new(0.0, 25.0, 10.0, 10.0)));
        assert!(rect_in_view(Vec2::zero(), view, Rect::new(0.0, -35.0, 10.0, 10.0)));
    }

    #[test]
    fn rect_one_unit_beyond_view_is_culled() {
        let view = Vec2::new(100.0, 50.0);
        assert!(!rect_in_view(Vec2::zero(), view, Rect::new(51.0, 0.0, 10.0, 10.0)));
        assert!(!rect_in_view(Vec2::zero(), view, Rect::new(-61.0, 0.0, 10.0, 10.0)));
        assert!(!rect_in_view(Vec2::zero(), view, Rect::new(0.0, 26.0, 10.0, 10.0)));
        assert!(!rect_in_view(Vec2::zero(), view, Rect::new(0.0, -36.0, 10.0, 10.0)));
    }

    #[test]
    fn rect_covering_view_is_visible() {
        let view = Vec2::new(10.0, 10.0);
        assert!(rect_in_view(Vec2::zero(), view, Rect::new(-100.0, -100.0, 200.0, 200.0)));
    }

    #[test]
    fn circle_culling_uses_radius() {
        let view = Vec2::new(100.0, 100.0);
        assert!(circle_in_view(Vec2::zero(), view, Vec2::new(60.0, 0.0), 10.0));
        assert!(!circle_in_view(Vec2::zero(), view, Vec2::new(61.0, 0.0), 10.0));
    }

    #[test]
    fn circle_to_screen_scales_radius() {
        let (c, r) = circle_to_screen(Vec2::zero(), 3.0, Vec2::new(10.0, 10.0), Vec2::zero(), 2.0);
        assert_eq!(c, Vec2::new(15.0, 15.0));
        assert_eq!(r, 6.0);
    }

    #[test]
    fn points_bounds_spans_all_points() {
        let pts = [Vec2::new(1.0, 5.0), Vec2::new(-2.0, 3.0), Vec2::new(4.0, -1.0)];
        assert_eq!(points_bounds(&pts), Some(Rect::new(-2.0, -1.0, 6.0, 6.0)));
        assert_eq!(points_bounds(&[]), None);
    }
}

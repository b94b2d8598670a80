use log::{debug, trace};

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;
use crate::render::Renderer;
use crate::scene::Layer;

use super::transform;

/// Closest the camera can zoom out: one screen pixel per world unit.
pub const MIN_ZOOM: f32 = 1.0;
/// Closest the camera can zoom in.
pub const MAX_ZOOM: f32 = 1024.0;

/// How a zoom operation changes the current zoom.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomChange {
    /// Multiply (zoom in) or divide (zoom out) by a factor.
    Step(f32),
    /// Add (zoom in) or subtract (zoom out) an amount.
    Amount(f32),
}

/// Which edges of a [`Bounds`] rectangle are enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundEdges {
    pub min_x: bool,
    pub max_x: bool,
    pub min_y: bool,
    pub max_y: bool,
}

impl BoundEdges {
    pub const ALL: Self = Self { min_x: true, max_x: true, min_y: true, max_y: true };
    pub const NONE: Self = Self { min_x: false, max_x: false, min_y: false, max_y: false };

    #[inline]
    pub fn any(self) -> bool {
        self.min_x || self.max_x || self.min_y || self.max_y
    }
}

impl Default for BoundEdges {
    fn default() -> Self {
        Self::ALL
    }
}

/// World-space rectangle the view is kept inside.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
    pub edges: BoundEdges,
}

impl Bounds {
    /// Bounds spanning two opposite corners, in any order.
    pub fn from_corners(a: Vec2, b: Vec2, edges: BoundEdges) -> Self {
        Self { min: a.min(b), max: a.max(b), edges }
    }

    #[inline]
    pub fn rect(self) -> Rect {
        Rect::from_corners(self.min, self.max)
    }
}

/// Initial camera state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    pub position: Vec2,
    pub zoom: f32,
    /// Default follow smoothing in `[0, 1]`. 0 never moves, 1 snaps.
    pub smoothing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { position: Vec2::zero(), zoom: MIN_ZOOM, smoothing: 0.1 }
    }
}

impl CameraConfig {
    pub fn position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }
}

/// 2D camera over a fixed-size viewport.
///
/// All drawing goes through a [`Renderer`]; shapes are given in world units
/// and are skipped when they fall completely outside the current view.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec2,
    zoom: f32,
    viewport: Viewport,
    view_size: Vec2,
    smoothing: f32,
    bounds: Option<Bounds>,
}

impl Camera {
    pub fn new(viewport: Viewport, position: Vec2, zoom: f32) -> Self {
        Self::with_config(viewport, CameraConfig::default().position(position).zoom(zoom))
    }

    pub fn with_config(viewport: Viewport, config: CameraConfig) -> Self {
        let zoom = clamp_zoom(config.zoom);
        Self {
            position: config.position,
            zoom,
            viewport,
            view_size: viewport.size() / zoom,
            smoothing: clamp_unit(config.smoothing),
            bounds: None,
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Size of the visible area in world units.
    #[inline]
    pub fn view_size(&self) -> Vec2 {
        self.view_size
    }

    #[inline]
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    #[inline]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// World rectangle currently in view.
    #[inline]
    pub fn view_rect(&self) -> Rect {
        transform::view_rect(self.position, self.view_size)
    }

    #[inline]
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        transform::world_to_screen(self.position, self.zoom, self.view_size, p)
    }

    #[inline]
    pub fn screen_to_world(&self, s: Vec2) -> Vec2 {
        transform::screen_to_world(self.position, self.zoom, self.view_size, s)
    }

    #[inline]
    pub fn rect_in_view(&self, rect: Rect) -> bool {
        transform::rect_in_view(self.position, self.view_size, rect)
    }

    #[inline]
    pub fn circle_in_view(&self, center: Vec2, radius: f32) -> bool {
        transform::circle_in_view(self.position, self.view_size, center, radius)
    }

    // ── movement ──────────────────────────────────────────────────────────

    /// Moves the view by a screen-pixel delta. Dragging right moves the
    /// camera left in world space.
    pub fn pan(&mut self, delta_px: Vec2) {
        self.position -= delta_px / self.zoom;
        self.apply_bounds();
    }

    /// Zooms in, never past `limit` (capped at [`MAX_ZOOM`]).
    ///
    /// Never lowers the zoom: a limit below the current zoom, or a change
    /// that would shrink it, leaves the zoom where it is.
    pub fn zoom_in(&mut self, change: ZoomChange, limit: Option<f32>) {
        let limit = limit.map_or(MAX_ZOOM, |l| l.min(MAX_ZOOM));
        let z = match change {
            ZoomChange::Step(f) => self.zoom * f,
            ZoomChange::Amount(a) => self.zoom + a,
        };
        self.apply_zoom(z.min(limit).max(self.zoom));
    }

    /// Zooms out, never past `limit` (floored at [`MIN_ZOOM`]).
    ///
    /// Never raises the zoom, mirroring [`Camera::zoom_in`].
    pub fn zoom_out(&mut self, change: ZoomChange, limit: Option<f32>) {
        let limit = limit.map_or(MIN_ZOOM, |l| l.max(MIN_ZOOM));
        let z = match change {
            ZoomChange::Step(f) if f != 0.0 => self.zoom / f,
            ZoomChange::Step(_) => self.zoom,
            ZoomChange::Amount(a) => self.zoom - a,
        };
        self.apply_zoom(z.max(limit).min(self.zoom));
    }

    /// Doubles the zoom.
    pub fn zoom_in_step(&mut self) {
        self.zoom_in(ZoomChange::Step(2.0), None);
    }

    /// Halves the zoom.
    pub fn zoom_out_step(&mut self) {
        self.zoom_out(ZoomChange::Step(2.0), None);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.apply_zoom(zoom);
    }

    /// Moves towards `target + offset`.
    ///
    /// `smoothing` (or the camera default) is the fraction of the remaining
    /// distance covered this call: 0 stays put, 1 snaps onto the target.
    pub fn follow(&mut self, target: Vec2, offset: Vec2, smoothing: Option<f32>) {
        let s = clamp_unit(smoothing.unwrap_or(self.smoothing));
        let t = target + offset;
        self.position = t + (self.position - t) * (1.0 - s);
        self.apply_bounds();
    }

    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = clamp_unit(smoothing);
    }

    // ── bounds ────────────────────────────────────────────────────────────

    /// Restricts the view to the rectangle spanned by two corners and
    /// immediately moves the camera inside it.
    pub fn set_bounds(&mut self, a: Vec2, b: Vec2, edges: BoundEdges) {
        let bounds = Bounds::from_corners(a, b, edges);
        debug!("camera bounds set to {:?}..{:?} ({:?})", bounds.min, bounds.max, edges);
        self.bounds = Some(bounds);
        self.apply_bounds();
    }

    pub fn clear_bounds(&mut self) {
        if self.bounds.take().is_some() {
            debug!("camera bounds cleared");
        }
    }

    /// Snaps the position so that no active bound edge is crossed by the view.
    ///
    /// When both edges of an axis are active and the view is wider than the
    /// bounds on that axis, the camera is centred on the bounds instead.
    pub fn enforce_bounds(&mut self) {
        self.apply_bounds();
    }

    fn apply_bounds(&mut self) {
        let Some(b) = self.bounds else { return };
        let half = self.view_size / 2.0;
        self.position.x = clamp_axis(
            self.position.x,
            half.x,
            b.min.x,
            b.max.x,
            b.edges.min_x,
            b.edges.max_x,
        );
        self.position.y = clamp_axis(
            self.position.y,
            half.y,
            b.min.y,
            b.max.y,
            b.edges.min_y,
            b.edges.max_y,
        );
    }

    fn apply_zoom(&mut self, z: f32) {
        let z = clamp_zoom(z);
        if z != self.zoom {
            debug!("camera zoom {} -> {}", self.zoom, z);
        }
        self.zoom = z;
        self.view_size = self.viewport.size() / z;
        self.apply_bounds();
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Draws a world-space rectangle; skipped when off view.
    pub fn draw_rect<R: Renderer + ?Sized>(&self, renderer: &mut R, rect: Rect, color: Color) {
        if !self.rect_in_view(rect) {
            trace!("culled rect {rect:?}");
            return;
        }
        let r = transform::rect_to_screen(self.position, self.zoom, self.view_size, rect);
        renderer.draw_rect(r, color);
    }

    pub fn draw_circle<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        center: Vec2,
        radius: f32,
        color: Color,
    ) {
        if !self.circle_in_view(center, radius) {
            trace!("culled circle at {center:?} r={radius}");
            return;
        }
        let (c, r) =
            transform::circle_to_screen(self.position, self.zoom, self.view_size, center, radius);
        renderer.draw_circle(c, r, color);
    }

    /// Draws a line; `width` is in world units.
    pub fn draw_line<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    ) {
        if !self.rect_in_view(Rect::from_corners(from, to)) {
            trace!("culled line {from:?}..{to:?}");
            return;
        }
        renderer.draw_line(
            self.world_to_screen(from),
            self.world_to_screen(to),
            color,
            width * self.zoom,
        );
    }

    /// Draws a filled polygon. Empty point sets draw nothing.
    pub fn draw_polygon<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        points: &[Vec2],
        color: Color,
    ) {
        let Some(bounds) = transform::points_bounds(points) else { return };
        if !self.rect_in_view(bounds) {
            trace!("culled polygon ({} points)", points.len());
            return;
        }
        let screen: Vec<Vec2> = points.iter().map(|p| self.world_to_screen(*p)).collect();
        renderer.draw_polygon(&screen, color);
    }

    /// Composites `layer` with its top-left at `world_pos`.
    ///
    /// The layer is in screen pixels, so its world footprint is
    /// `layer.size / zoom`.
    pub fn blit<R: Renderer + ?Sized>(&self, renderer: &mut R, layer: &Layer, world_pos: Vec2) {
        let footprint = Rect::from_origin_size(world_pos, layer.size() / self.zoom);
        if !self.rect_in_view(footprint) {
            trace!("culled layer blit at {world_pos:?}");
            return;
        }
        renderer.blit(layer, self.world_to_screen(world_pos));
    }
}

#[inline]
fn clamp_zoom(z: f32) -> f32 {
    if z.is_nan() { MIN_ZOOM } else { z.clamp(MIN_ZOOM, MAX_ZOOM) }
}

#[inline]
fn clamp_unit(s: f32) -> f32 {
    if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) }
}

fn clamp_axis(pos: f32, half: f32, min: f32, max: f32, use_min: bool, use_max: bool) -> f32 {
    if use_min && use_max && 2.0 * half >= max - min {
        return (min + max) / 2.0;
    }
    let mut p = pos;
    if use_min && p - half < min {
        p = min + half;
    }
    if use_max && p + half > max {
        p = max - half;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandRecorder, RenderOp};

    const EPSILON: f32 = 1e-4;

    fn camera() -> Camera {
        Camera::new(Viewport::new(800.0, 600.0), Vec2::zero(), 1.0)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn view_size_follows_zoom() {
        let cam = Camera::new(Viewport::new(800.0, 600.0), Vec2::zero(), 4.0);
        assert_eq!(cam.view_size(), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn construction_clamps_zoom() {
        let low = Camera::new(Viewport::new(100.0, 100.0), Vec2::zero(), 0.25);
        let high = Camera::new(Viewport::new(100.0, 100.0), Vec2::zero(), 5000.0);
        assert_eq!(low.zoom(), MIN_ZOOM);
        assert_eq!(high.zoom(), MAX_ZOOM);
    }

    #[test]
    fn config_smoothing_is_clamped() {
        let cam = Camera::with_config(
            Viewport::new(100.0, 100.0),
            CameraConfig::default().smoothing(3.0),
        );
        assert_eq!(cam.smoothing(), 1.0);
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn zoom_step_doubles_and_halves() {
        let mut cam = camera();
        cam.set_zoom(8.0);
        cam.zoom_in_step();
        assert_eq!(cam.zoom(), 16.0);
        cam.zoom_out_step();
        assert_eq!(cam.zoom(), 8.0);
        assert_eq!(cam.view_size(), Vec2::new(100.0, 75.0));
    }

    #[test]
    fn zoom_sequence_stays_in_range() {
        let mut cam = camera();
        for _ in 0..20 {
            cam.zoom_in_step();
            assert!(cam.zoom() <= MAX_ZOOM);
        }
        assert_eq!(cam.zoom(), MAX_ZOOM);
        for _ in 0..20 {
            cam.zoom_out(ZoomChange::Amount(100.0), None);
            assert!(cam.zoom() >= MIN_ZOOM);
        }
        assert_eq!(cam.zoom(), MIN_ZOOM);
    }

    #[test]
    fn zoom_limits_are_respected() {
        let mut cam = camera();
        cam.zoom_in(ZoomChange::Amount(50.0), Some(10.0));
        assert_eq!(cam.zoom(), 10.0);
        cam.zoom_in(ZoomChange::Step(1000.0), Some(4096.0));
        assert_eq!(cam.zoom(), MAX_ZOOM);
        cam.zoom_out(ZoomChange::Step(4.0), Some(300.0));
        assert_eq!(cam.zoom(), 300.0);
        cam.zoom_out(ZoomChange::Step(1000.0), Some(0.1));
        assert_eq!(cam.zoom(), MIN_ZOOM);
    }

    #[test]
    fn limit_on_the_wrong_side_keeps_zoom() {
        let mut cam = camera();
        cam.set_zoom(8.0);
        cam.zoom_in(ZoomChange::Step(2.0), Some(4.0));
        assert_eq!(cam.zoom(), 8.0);
        cam.zoom_out(ZoomChange::Step(2.0), Some(16.0));
        assert_eq!(cam.zoom(), 8.0);
        cam.zoom_in(ZoomChange::Amount(-3.0), None);
        assert_eq!(cam.zoom(), 8.0);
        cam.zoom_out(ZoomChange::Amount(-3.0), None);
        assert_eq!(cam.zoom(), 8.0);
    }

    #[test]
    fn zero_step_zoom_out_is_ignored() {
        let mut cam = camera();
        cam.set_zoom(4.0);
        cam.zoom_out(ZoomChange::Step(0.0), None);
        assert_eq!(cam.zoom(), 4.0);
    }

    // ── pan / follow ──────────────────────────────────────────────────────

    #[test]
    fn pan_divides_by_zoom() {
        let mut cam = camera();
        cam.set_zoom(4.0);
        cam.pan(Vec2::new(40.0, -20.0));
        assert_eq!(cam.position(), Vec2::new(-10.0, 5.0));
    }

    #[test]
    fn follow_zero_smoothing_stays_put() {
        let mut cam = camera();
        cam.follow(Vec2::new(100.0, 100.0), Vec2::zero(), Some(0.0));
        assert_eq!(cam.position(), Vec2::zero());
    }

    #[test]
    fn follow_full_smoothing_snaps_to_target_plus_offset() {
        let mut cam = camera();
        cam.follow(Vec2::new(100.0, 50.0), Vec2::new(5.0, -5.0), Some(1.0));
        assert_eq!(cam.position(), Vec2::new(105.0, 45.0));
    }

    #[test]
    fn follow_half_smoothing_covers_half_the_distance() {
        let mut cam = camera();
        cam.follow(Vec2::new(10.0, -20.0), Vec2::zero(), Some(0.5));
        assert!(approx(cam.position().x, 5.0));
        assert!(approx(cam.position().y, -10.0));
    }

    #[test]
    fn follow_uses_default_smoothing() {
        let mut cam = Camera::with_config(
            Viewport::new(100.0, 100.0),
            CameraConfig::default().smoothing(0.25),
        );
        cam.follow(Vec2::new(100.0, 0.0), Vec2::zero(), None);
        assert!(approx(cam.position().x, 25.0));
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn set_bounds_pulls_view_inside() {
        // View is 800x600 at zoom 1; bounds are 2000x2000 starting at origin.
        let mut cam = camera();
        cam.set_bounds(Vec2::new(2000.0, 2000.0), Vec2::zero(), BoundEdges::ALL);
        assert_eq!(cam.position(), Vec2::new(400.0, 300.0));
        let view = cam.view_rect();
        assert!(view.min().x >= 0.0 && view.min().y >= 0.0);
    }

    #[test]
    fn pan_is_clamped_by_max_edge() {
        let mut cam = camera();
        cam.set_bounds(Vec2::zero(), Vec2::new(1000.0, 1000.0), BoundEdges::ALL);
        cam.pan(Vec2::new(-5000.0, -5000.0));
        assert_eq!(cam.position(), Vec2::new(600.0, 700.0));
    }

    #[test]
    fn inactive_edges_are_not_enforced() {
        let mut cam = camera();
        let edges = BoundEdges { min_x: true, ..BoundEdges::NONE };
        cam.set_bounds(Vec2::zero(), Vec2::new(1000.0, 1000.0), edges);
        cam.pan(Vec2::new(0.0, 10_000.0));
        assert_eq!(cam.position(), Vec2::new(400.0, -10_000.0));
    }

    #[test]
    fn view_wider_than_bounds_is_centred() {
        let mut cam = camera();
        cam.set_bounds(Vec2::zero(), Vec2::new(100.0, 1000.0), BoundEdges::ALL);
        assert_eq!(cam.position().x, 50.0);
    }

    #[test]
    fn zoom_out_re_enforces_bounds() {
        let mut cam = camera();
        cam.set_zoom(4.0);
        cam.set_bounds(Vec2::zero(), Vec2::new(1000.0, 1000.0), BoundEdges::ALL);
        assert_eq!(cam.position(), Vec2::new(100.0, 75.0));
        cam.zoom_out_step();
        assert_eq!(cam.position(), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn clear_bounds_stops_enforcement() {
        let mut cam = camera();
        cam.set_bounds(Vec2::zero(), Vec2::new(1000.0, 1000.0), BoundEdges::ALL);
        cam.clear_bounds();
        cam.pan(Vec2::new(5000.0, 0.0));
        assert_eq!(cam.position().x, 400.0 - 5000.0);
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn draw_rect_transforms_to_screen() {
        let mut cam = camera();
        cam.set_zoom(2.0);
        let mut rec = CommandRecorder::new();
        cam.draw_rect(&mut rec, Rect::new(10.0, 10.0, 5.0, 5.0), Color::WHITE);
        assert_eq!(
            rec.ops(),
            &[RenderOp::Rect { rect: Rect::new(420.0, 320.0, 10.0, 10.0), color: Color::WHITE }]
        );
    }

    #[test]
    fn off_view_shapes_are_skipped() {
        let cam = camera();
        let mut rec = CommandRecorder::new();
        cam.draw_rect(&mut rec, Rect::new(401.0, 0.0, 10.0, 10.0), Color::WHITE);
        cam.draw_circle(&mut rec, Vec2::new(0.0, -400.0), 50.0, Color::WHITE);
        cam.draw_line(&mut rec, Vec2::new(-900.0, 0.0), Vec2::new(-500.0, 0.0), Color::WHITE, 1.0);
        cam.draw_polygon(
            &mut rec,
            &[Vec2::new(500.0, 500.0), Vec2::new(600.0, 500.0), Vec2::new(550.0, 600.0)],
            Color::WHITE,
        );
        assert!(rec.ops().is_empty());
    }

    #[test]
    fn line_width_scales_with_zoom() {
        let mut cam = camera();
        cam.set_zoom(3.0);
        let mut rec = CommandRecorder::new();
        cam.draw_line(&mut rec, Vec2::zero(), Vec2::new(10.0, 0.0), Color::BLACK, 2.0);
        match rec.ops() {
            [RenderOp::Line { width, .. }] => assert_eq!(*width, 6.0),
            other => panic!("unexpected ops {other:?}"),
        }
    }

    #[test]
    fn empty_polygon_draws_nothing() {
        let cam = camera();
        let mut rec = CommandRecorder::new();
        cam.draw_polygon(&mut rec, &[], Color::WHITE);
        assert!(rec.ops().is_empty());
    }

    #[test]
    fn blit_at_view_origin_lands_on_screen_origin() {
        let mut cam = camera();
        cam.set_zoom(2.0);
        cam.pan(Vec2::new(-30.0, 12.0));
        let layer = Layer::new(800.0, 600.0);
        let mut rec = CommandRecorder::new();
        cam.blit(&mut rec, &layer, cam.screen_to_world(Vec2::zero()));
        match rec.ops() {
            [RenderOp::Blit { origin, size, .. }] => {
                assert!(approx(origin.x, 0.0) && approx(origin.y, 0.0));
                assert_eq!(*size, Vec2::new(800.0, 600.0));
            }
            other => panic!("unexpected ops {other:?}"),
        }
    }

    #[test]
    fn blit_far_away_is_culled() {
        let cam = camera();
        let layer = Layer::new(10.0, 10.0);
        let mut rec = CommandRecorder::new();
        cam.blit(&mut rec, &layer, Vec2::new(1000.0, 1000.0));
        assert!(rec.ops().is_empty());
    }
}

//! Software renderer over an `RgbaImage`.
//!
//! Blends premultiplied colours onto an opaque background. Text is drawn as
//! one box per glyph cell since font rasterisation is out of reach here.

use std::path::Path;

use image::{Rgba, RgbaImage};

use vista_engine::coords::{Rect, Vec2};
use vista_engine::paint::{Color, Rgb};
use vista_engine::render::Renderer;
use vista_engine::scene::{Bitmap, DrawCmd, Layer, Stroke};
use vista_engine::text::GlyphRun;

pub struct RasterRenderer {
    target: RgbaImage,
    background: Rgb,
}

impl RasterRenderer {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut r = Self { target: RgbaImage::new(width, height), background };
        r.clear();
        r
    }

    /// Floods the target with the background colour.
    pub fn clear(&mut self) {
        let bg = Rgba([self.background.r, self.background.g, self.background.b, 255]);
        for p in self.target.pixels_mut() {
            *p = bg;
        }
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.target
    }

    pub fn save(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        self.target.save(path)
    }

    // ── pixel helpers ─────────────────────────────────────────────────────

    fn blend(&mut self, x: i64, y: i64, c: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.target.width()) || y >= i64::from(self.target.height()) {
            return;
        }
        let p = self.target.get_pixel_mut(x as u32, y as u32);
        let inv = 1.0 - c.a;
        let src = [c.r, c.g, c.b, c.a];
        for (dst, s) in p.0.iter_mut().zip(src) {
            let d = f32::from(*dst) / 255.0;
            *dst = ((s + d * inv).clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }

    /// Pixel range `[lo, hi)` covered by `rect`, clipped to the target.
    fn span(&self, rect: Rect) -> (i64, i64, i64, i64) {
        let r = rect.normalized();
        let w = i64::from(self.target.width());
        let h = i64::from(self.target.height());
        (
            (r.origin.x.round() as i64).clamp(0, w),
            (r.origin.y.round() as i64).clamp(0, h),
            ((r.origin.x + r.size.x).round() as i64).clamp(0, w),
            ((r.origin.y + r.size.y).round() as i64).clamp(0, h),
        )
    }

    fn fill_rect(&mut self, rect: Rect, c: Color) {
        if c.is_transparent() || !rect.is_finite() {
            return;
        }
        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, c);
            }
        }
    }

    /// Strokes along the inside of `rect`.
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        let r = rect.normalized();
        let w = stroke.width.min(r.size.x / 2.0).min(r.size.y / 2.0).max(0.0);
        let (o, s) = (r.origin, r.size);
        self.fill_rect(Rect::new(o.x, o.y, s.x, w), stroke.color);
        self.fill_rect(Rect::new(o.x, o.y + s.y - w, s.x, w), stroke.color);
        self.fill_rect(Rect::new(o.x, o.y + w, w, s.y - 2.0 * w), stroke.color);
        self.fill_rect(Rect::new(o.x + s.x - w, o.y + w, w, s.y - 2.0 * w), stroke.color);
    }

    /// Visits the centre of every pixel inside `bounds`.
    fn each_pixel(&mut self, bounds: Rect, c: Color, inside: impl Fn(Vec2) -> bool) {
        if c.is_transparent() || !bounds.is_finite() {
            return;
        }
        let (x0, y0, x1, y1) = self.span(bounds);
        for y in y0..y1 {
            for x in x0..x1 {
                if inside(Vec2::new(x as f32 + 0.5, y as f32 + 0.5)) {
                    self.blend(x, y, c);
                }
            }
        }
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, origin: Vec2) {
        let ox = origin.x.round() as i64;
        let oy = origin.y.round() as i64;
        for (x, y, px) in bitmap.pixels().enumerate_pixels() {
            let [r, g, b, a] = px.0;
            if a == 0 {
                continue;
            }
            self.blend(ox + i64::from(x), oy + i64::from(y), Color::from_srgb_u8(r, g, b, a));
        }
    }
}

impl Renderer for RasterRenderer {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.fill_rect(rect, color);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let r2 = radius * radius;
        let bounds = Rect::from_center(center, Vec2::splat(2.0 * radius));
        self.each_pixel(bounds, color, |p| {
            let d = p - center;
            d.dot(d) <= r2
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        let half = (width / 2.0).max(0.5);
        let bounds =
            Rect::from_corners(from.min(to) - Vec2::splat(half), from.max(to) + Vec2::splat(half));
        let seg = to - from;
        let len2 = seg.dot(seg);
        self.each_pixel(bounds, color, |p| {
            let t = if len2 > 0.0 { ((p - from).dot(seg) / len2).clamp(0.0, 1.0) } else { 0.0 };
            (p - (from + seg * t)).length() <= half
        });
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let (min, max) = points
            .iter()
            .fold((points[0], points[0]), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        self.each_pixel(Rect::from_corners(min, max), color, |p| {
            // Even-odd crossing test.
            let mut inside = false;
            let mut j = points.len() - 1;
            for i in 0..points.len() {
                let (a, b) = (points[i], points[j]);
                if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                    inside = !inside;
                }
                j = i;
            }
            inside
        });
    }

    fn draw_text(&mut self, run: &GlyphRun, origin: Vec2) {
        let count = run.text.chars().count();
        if count == 0 {
            return;
        }
        let cell = run.width() / count as f32;
        let h = run.height();
        for (i, ch) in run.text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x = origin.x + i as f32 * cell;
            self.fill_rect(Rect::new(x + cell * 0.15, origin.y + h * 0.2, cell * 0.7, h * 0.6), run.color);
        }
    }

    fn blit(&mut self, layer: &Layer, origin: Vec2) {
        for cmd in layer.commands() {
            match cmd {
                DrawCmd::Fill(c) => self.fill_rect(Rect::from_origin_size(origin, layer.size()), *c),
                DrawCmd::Rect(r) => {
                    let rect = r.rect.translated(origin);
                    self.fill_rect(rect, r.color);
                    if let Some(stroke) = r.stroke {
                        self.stroke_rect(rect, stroke);
                    }
                }
                DrawCmd::Text(t) => self.draw_text(&t.run, origin + t.origin),
                DrawCmd::Image(img) => self.draw_bitmap(&img.bitmap, origin + img.origin),
            }
        }
    }
}

use super::Rgb;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Premultiplied colour from an 8-bit RGB value and an opacity in `[0, 1]`.
    #[inline]
    pub fn from_rgb(rgb: Rgb, opacity: f32) -> Self {
        Self::from_srgb_u8(rgb.r, rgb.g, rgb.b, 255).with_opacity(opacity)
    }

    /// Creates a premultiplied color from straight bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Scales every channel by `opacity` (clamped to `[0, 1]`).
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let o = opacity.clamp(0.0, 1.0);
        Self { r: self.r * o, g: self.g * o, b: self.b * o, a: self.a * o }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb_premultiplies() {
        let c = Color::from_rgb(Rgb::new(255, 0, 0), 0.5);
        assert_eq!(c, Color { r: 0.5, g: 0.0, b: 0.0, a: 0.5 });
    }

    #[test]
    fn to_straight_undoes_premultiplication() {
        let (r, g, b, a) = Color::from_rgb(Rgb::WHITE, 0.25).to_straight();
        assert!((r - 1.0).abs() < 1e-6 && (g - 1.0).abs() < 1e-6 && (b - 1.0).abs() < 1e-6);
        assert_eq!(a, 0.25);
    }

    #[test]
    fn zero_opacity_is_transparent() {
        assert!(Color::from_rgb(Rgb::BLACK, 0.0).is_transparent());
    }
}

use clamped::Clamp;
use num_traits::AsPrimitive;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    pub fn rgba_i(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub fn lerp(self, c: Color, u: f32) -> Color {
        let u = u.clamped(0.0, 1.0);
        let om = 1.0 - u;
        Color {
            r: self.r * om + c.r * u,
            g: self.g * om + c.g * u,
            b: self.b * om + c.b * u,
            a: self.a * om + c.a * u,
        }
    }

    /// Packs the color into 8-bit RGBA, clamping each channel.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamped(0.0, 1.0) * 255.0 + 0.5) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl<T: AsPrimitive<f32>> From<(T, T, T)> for Color {
    fn from((r, g, b): (T, T, T)) -> Self {
        Color::rgb(r.as_(), g.as_(), b.as_())
    }
}

impl<T: AsPrimitive<f32>> From<(T, T, T, T)> for Color {
    fn from((r, g, b, a): (T, T, T, T)) -> Self {
        Color::rgba(r.as_(), g.as_(), b.as_(), a.as_())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_clamps_channels() {
        assert_eq!(Color::rgba(1.0, 0.0, 0.5, 2.0).to_rgba8(), [255, 0, 128, 255]);
        assert_eq!(Color::rgba_i(10, 20, 30, 40).to_rgba8(), [10, 20, 30, 40]);
    }

    #[test]
    fn lerp_clamps_factor() {
        let a = Color::rgb(0.0, 0.0, 0.0);
        let b = Color::rgb(1.0, 1.0, 1.0);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(a.lerp(b, 3.0), b);
    }
}

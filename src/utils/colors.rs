use gpui::Rgba;

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Linearly blends towards `other`; `amount` is clamped to `0..=1`.
    fn mix(self, other: Rgba, amount: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn mix(self, other: Rgba, amount: f32) -> Self {
        let t = amount.clamp(0., 1.);
        let lerp = |from: f32, to: f32| from + (to - from) * t;

        Rgba {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }
}

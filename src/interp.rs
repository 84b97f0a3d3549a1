//! Scalar and color interpolation helpers used by the map seed and coloring formulas.
//!
//! Everything here is total: out-of-range `t` saturates at the endpoints instead of
//! extrapolating, and NaN `t` collapses to the start of the segment.

/// An opaque 8-bit RGB color. Transparency is expressed as `Option<Rgb>::None` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Linear interpolation clamped to `[a, b]`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t.is_nan() || t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// Byte-channel lerp. Interior results are truncated toward zero.
pub fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    if t.is_nan() || t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    v as u8
}

pub fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::new(lerp_u8(a.r, b.r, t), lerp_u8(a.g, b.g, t), lerp_u8(a.b, b.b, t))
}

/// Two-segment gradient over `t` already normalized into `[0, 2]`.
pub fn lerp_color3(a: Rgb, b: Rgb, c: Rgb, t: f64) -> Rgb {
    if t < 1.0 {
        return lerp_rgb(a, b, t);
    }
    lerp_rgb(b, c, t - 1.0)
}

/// Maps `t` in `[min, max]` onto the `a -> b -> c` gradient.
///
/// The pivot where the gradient passes through `b` is `center` when given,
/// otherwise the arithmetic midpoint of the range.
pub fn lerp_color3_range(
    a: Rgb,
    b: Rgb,
    c: Rgb,
    min: f64,
    max: f64,
    t: f64,
    center: Option<f64>,
) -> Rgb {
    let pivot = center.unwrap_or(min + (max - min) / 2.0);

    if t < pivot {
        return lerp_rgb(a, b, (t - min) / (pivot - min));
    }
    lerp_rgb(b, c, (t - pivot) / (max - pivot))
}

pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        return min;
    }
    if v > max {
        return max;
    }
    v
}

/// Rounds to `places` decimal digits, half away from zero.
pub fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}

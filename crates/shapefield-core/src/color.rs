//! Colour helpers: HSL conversion for the per-vertex colour field and CSS
//! colour parsing for the scene background.

use crate::constants::*;
use crate::ConfigError;
use glam::Vec3;

/// Linear RGB triple in [0, 1].
pub type Rgb = [f32; 3];

/// Convert HSL to RGB.
///
/// Hue wraps into [0, 1); saturation and lightness are clamped into [0, 1], so
/// a lightness above 1 saturates to white rather than overflowing.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb {
    let h = hue.rem_euclid(1.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let lo = 2.0 * l - hi;
    [
        hue_to_channel(lo, hi, h + 1.0 / 3.0),
        hue_to_channel(lo, hi, h),
        hue_to_channel(lo, hi, h - 1.0 / 3.0),
    ]
}

#[inline]
fn hue_to_channel(lo: f32, hi: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    }
}

/// HSL components of the colour assigned to a vertex at `p` on shape `index`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexHsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

#[inline]
pub fn vertex_hsl(p: Vec3, index: usize) -> VertexHsl {
    VertexHsl {
        hue: HUE_BASE + p.x * HUE_PER_X,
        saturation: SATURATION_BASE + (p.y * SATURATION_Y_FREQ).sin() * SATURATION_SWING,
        lightness: (index as f32 * LIGHTNESS_PER_INDEX).max(LIGHTNESS_MIN),
    }
}

#[inline]
pub fn vertex_color(p: Vec3, index: usize) -> Rgb {
    let c = vertex_hsl(p, index);
    hsl_to_rgb(c.hue, c.saturation, c.lightness)
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Parsed scene background. `alpha == 0` means the page shows through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Background {
    /// sRGB-encoded channels as written in CSS.
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Background {
    pub const TRANSPARENT: Background = Background {
        rgb: [0.0, 0.0, 0.0],
        alpha: 0.0,
    };

    pub fn is_transparent(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Channels converted for a linear render target.
    pub fn linear(&self) -> [f32; 4] {
        [
            srgb_to_linear(self.rgb[0]),
            srgb_to_linear(self.rgb[1]),
            srgb_to_linear(self.rgb[2]),
            self.alpha,
        ]
    }
}

/// Parse `#rgb`, `#rrggbb` or `transparent`.
pub fn parse_background(s: &str) -> Result<Background, ConfigError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("transparent") {
        return Ok(Background::TRANSPARENT);
    }
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| ConfigError::Color(s.to_string()))?;
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16))
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(|| ConfigError::Color(s.to_string()))?;
    let bytes: [u32; 3] = match digits.as_slice() {
        [r, g, b] => [r * 17, g * 17, b * 17],
        [r1, r0, g1, g0, b1, b0] => [r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0],
        _ => return Err(ConfigError::Color(s.to_string())),
    };
    Ok(Background {
        rgb: bytes.map(|b| b as f32 / 255.0),
        alpha: 1.0,
    })
}

//! Color construction from RGB, HSL and HSV components.
//!
//! The inverse direction (RGB to HSL, RGB to ARGB) lives on `Color` itself.
//!
//! None of these constructors clamp: out-of-range channels and alpha pass
//! straight into the resulting `Color`.

use less_values::{Color, EvalError, Hsl};

use super::coerce::Numeric;

/// Percentages scale against 256, not 255.
const CHANNEL_SCALE: f64 = 256.0;

/// Which of the four HSV candidates feeds red, green, blue in each sector.
const HSV_PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 3, 1],
    [2, 0, 1],
    [1, 0, 3],
    [1, 2, 0],
    [3, 1, 0],
    [0, 1, 2],
];

pub fn rgb(r: &dyn Numeric, g: &dyn Numeric, b: &dyn Numeric) -> Result<Color, EvalError> {
    rgba(r, g, b, &1.0)
}

/// Build a color from channels and alpha.
///
/// Channel percentages are read as fractions of 256 (`100%` → `256`).
pub fn rgba(
    r: &dyn Numeric,
    g: &dyn Numeric,
    b: &dyn Numeric,
    a: &dyn Numeric,
) -> Result<Color, EvalError> {
    let rgb = [
        r.as_scaled(CHANNEL_SCALE)?,
        g.as_scaled(CHANNEL_SCALE)?,
        b.as_scaled(CHANNEL_SCALE)?,
    ];
    Ok(Color::new(rgb, a.as_number()?))
}

pub fn hsl(h: &dyn Numeric, s: &dyn Numeric, l: &dyn Numeric) -> Result<Color, EvalError> {
    hsla(h, s, l, &1.0)
}

/// Build a color from hue (degrees), saturation, lightness and alpha.
///
/// The hue is reduced with a floating-point remainder, so fractional
/// degrees survive. Saturation and lightness are not clamped.
pub fn hsla(
    h: &dyn Numeric,
    s: &dyn Numeric,
    l: &dyn Numeric,
    a: &dyn Numeric,
) -> Result<Color, EvalError> {
    Ok(hsl_to_color(Hsl {
        h: h.as_number()?,
        s: s.as_number()?,
        l: l.as_number()?,
        a: a.as_number()?,
    }))
}

/// Convert an `Hsl` record back to RGB.
pub fn hsl_to_color(hsl: Hsl) -> Color {
    let h = (hsl.h % 360.0) / 360.0;
    let (s, l) = (hsl.s, hsl.l);

    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;

    let hue = |t: f64| {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };
        if t * 6.0 < 1.0 {
            m1 + (m2 - m1) * t * 6.0
        } else if t * 2.0 < 1.0 {
            m2
        } else if t * 3.0 < 2.0 {
            m1 + (m2 - m1) * (2.0 / 3.0 - t) * 6.0
        } else {
            m1
        }
    };

    Color::new(
        [
            hue(h + 1.0 / 3.0) * 255.0,
            hue(h) * 255.0,
            hue(h - 1.0 / 3.0) * 255.0,
        ],
        hsl.a,
    )
}

pub fn hsv(h: &dyn Numeric, s: &dyn Numeric, v: &dyn Numeric) -> Result<Color, EvalError> {
    hsva(h, s, v, &1.0)
}

/// Build a color from hue (degrees), saturation, value and alpha.
///
/// Unlike `hsla`, the hue is truncated to whole degrees before the
/// remainder is taken, and the sector index is truncated the same way.
pub fn hsva(
    h: &dyn Numeric,
    s: &dyn Numeric,
    v: &dyn Numeric,
    a: &dyn Numeric,
) -> Result<Color, EvalError> {
    Ok(hsv_to_color(
        h.as_number()?,
        s.as_number()?,
        v.as_number()?,
        a.as_number()?,
    ))
}

/// HSV to RGB with integer hue reduction.
pub fn hsv_to_color(h: f64, s: f64, v: f64, a: f64) -> Color {
    // The divide-and-multiply by 360 is kept: it moves the last bit of many hues.
    let h = (h.trunc() % 360.0) / 360.0 * 360.0;
    let sector = (h / 60.0).trunc() % 6.0;
    let f = h / 60.0 - sector;

    let candidates = [
        v,
        v * (1.0 - s),
        v * (1.0 - f * s),
        v * (1.0 - (1.0 - f) * s),
    ];

    // Negative hues land in a negative sector; wrap it for the table lookup.
    let index = usize::try_from((sector as i64).rem_euclid(6)).unwrap_or(0);
    let perm = HSV_PERMUTATIONS[index];

    Color::new(
        [
            candidates[perm[0]] * 255.0,
            candidates[perm[1]] * 255.0,
            candidates[perm[2]] * 255.0,
        ],
        a,
    )
}

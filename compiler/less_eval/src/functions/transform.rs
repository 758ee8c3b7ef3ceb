//! Color adjustments built on the HSL view.
//!
//! Each transform converts to HSL, edits one component, clamps it where
//! noted, and converts back. Inputs are never modified.

use less_values::{Color, Dimension, EvalError, Hsl, Value};

use super::coerce::{clamp, Numeric};
use super::color_space::hsl_to_color;

/// Weight `mix` uses when none is given.
pub const DEFAULT_MIX_WEIGHT: f64 = 50.0;

/// Luminance below which `contrast` picks the light color.
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 0.43;

fn adjust(color: &Color, edit: impl FnOnce(&mut Hsl)) -> Color {
    let mut hsl = color.to_hsl();
    edit(&mut hsl);
    hsl_to_color(hsl)
}

pub fn saturate(color: &Color, amount: &Dimension) -> Color {
    adjust(color, |hsl| hsl.s = clamp(hsl.s + amount.value / 100.0))
}

pub fn desaturate(color: &Color, amount: &Dimension) -> Color {
    adjust(color, |hsl| hsl.s = clamp(hsl.s - amount.value / 100.0))
}

pub fn lighten(color: &Color, amount: &Dimension) -> Color {
    adjust(color, |hsl| hsl.l = clamp(hsl.l + amount.value / 100.0))
}

pub fn darken(color: &Color, amount: &Dimension) -> Color {
    adjust(color, |hsl| hsl.l = clamp(hsl.l - amount.value / 100.0))
}

/// Alpha delta: `%` amounts are fractions of 100, anything else is used as is.
fn alpha_amount(amount: &Dimension) -> f64 {
    if amount.is_percentage() {
        amount.value / 100.0
    } else {
        amount.value
    }
}

pub fn fadein(color: &Color, amount: &Dimension) -> Color {
    adjust(color, |hsl| hsl.a = clamp(hsl.a + alpha_amount(amount)))
}

pub fn fadeout(color: &Color, amount: &Dimension) -> Color {
    adjust(color, |hsl| hsl.a = clamp(hsl.a - alpha_amount(amount)))
}

/// Set alpha outright.
pub fn fade(color: &Color, amount: &Dimension) -> Color {
    adjust(color, |hsl| hsl.a = clamp(alpha_amount(amount)))
}

/// Rotate the hue by `amount` degrees. The result hue is in `[0, 360)`.
pub fn spin(color: &Color, amount: &Dimension) -> Color {
    adjust(color, |hsl| {
        let hue = (hsl.h + amount.value) % 360.0;
        hsl.h = if hue < 0.0 { hue + 360.0 } else { hue };
    })
}

/// Weighted mix of two colors, taking their alphas into account.
///
/// `weight` is the share of `first` in percent (the unit is ignored) and
/// defaults to 50.
pub fn mix(first: &Color, second: &Color, weight: Option<&Dimension>) -> Color {
    let weight = weight.map_or(DEFAULT_MIX_WEIGHT, |w| w.value);
    mix_colors(first, second, weight / 100.0)
}

/// Mix with `p` as a fraction.
pub fn mix_colors(first: &Color, second: &Color, p: f64) -> Color {
    let w = p * 2.0 - 1.0;
    let a = first.to_hsl().a - second.to_hsl().a;

    let w1 = ((if w * a == -1.0 { w } else { (w + a) / (1.0 + w * a) }) + 1.0) / 2.0;
    let w2 = 1.0 - w1;

    let rgb = [0, 1, 2].map(|i| first.rgb[i] * w1 + second.rgb[i] * w2);
    let alpha = first.alpha * p + second.alpha * (1.0 - p);
    Color::new(rgb, alpha)
}

/// Mix with white.
pub fn tint(color: &Color, amount: &Dimension) -> Color {
    mix(&Color::white(), color, Some(amount))
}

/// Mix with black.
pub fn shade(color: &Color, amount: &Dimension) -> Color {
    mix(&Color::black(), color, Some(amount))
}

pub fn greyscale(color: &Color) -> Color {
    desaturate(color, &Dimension::unitless(100.0))
}

/// Pick `light` for dark colors and `dark` for light ones.
///
/// Anything that is not a color yields `Ok(None)`: the call is a CSS
/// `filter: contrast(...)` and must be left alone.
pub fn contrast(
    color: &Value,
    dark: Option<&Value>,
    light: Option<&Value>,
    threshold: Option<&Value>,
) -> Result<Option<Value>, EvalError> {
    let Value::Color(color) = color else {
        return Ok(None);
    };
    let threshold = match threshold {
        Some(t) => t.as_number()?,
        None => DEFAULT_CONTRAST_THRESHOLD,
    };
    let picked = if color.luminance() * color.alpha < threshold {
        light.cloned().unwrap_or(Value::Color(Color::white()))
    } else {
        dark.cloned().unwrap_or(Value::Color(Color::black()))
    };
    Ok(Some(picked))
}

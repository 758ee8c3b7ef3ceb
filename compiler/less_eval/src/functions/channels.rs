//! Projections of a color onto single numbers.

use less_values::{Color, Value};

pub fn hue(color: &Color) -> Value {
    Value::number(color.to_hsl().h.round())
}

pub fn saturation(color: &Color) -> Value {
    Value::percentage((color.to_hsl().s * 100.0).round())
}

pub fn lightness(color: &Color) -> Value {
    Value::percentage((color.to_hsl().l * 100.0).round())
}

pub fn red(color: &Color) -> Value {
    Value::number(color.rgb[0])
}

pub fn green(color: &Color) -> Value {
    Value::number(color.rgb[1])
}

pub fn blue(color: &Color) -> Value {
    Value::number(color.rgb[2])
}

pub fn alpha(color: &Color) -> Value {
    Value::number(color.alpha)
}

/// Perceived brightness as a rounded percentage, weighted by alpha.
pub fn luma(color: &Color) -> Value {
    Value::percentage((color.luminance() * color.alpha * 100.0).round())
}

/// `#aarrggbb`, the form some legacy filters expect.
pub fn argb(color: &Color) -> Value {
    Value::anonymous(color.to_argb())
}

#[cfg(test)]
mod tests;

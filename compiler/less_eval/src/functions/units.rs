//! Unit manipulation: `unit`, `convert`, `percentage`, plus hex parsing for
//! `color`.

use less_ir::units;
use less_values::{invalid_argument, type_mismatch, Color, CssOptions, Dimension, EvalError, Value};

/// Normalize a dimension to its group's base unit (`px`, `s`, `rad`).
///
/// Units outside the conversion tables come back unchanged.
pub fn unify(dim: &Dimension) -> Dimension {
    match units::group_of(&dim.unit) {
        Some(group) => {
            let base = group.base_unit();
            match units::convert(dim.value, &dim.unit, base) {
                Some(value) => Dimension::new(value, base),
                None => dim.clone(),
            }
        }
        None => dim.clone(),
    }
}

/// Replace (or strip) the unit of `dim` without converting the number.
pub fn unit(dim: &Dimension, unit: Option<&Value>, options: &CssOptions) -> Value {
    let unit = unit.map(|u| u.to_css(options)).unwrap_or_default();
    Value::dimension(dim.value, unit)
}

/// Convert `dim` to the unit named by `target`.
///
/// Incompatible or unknown units leave the dimension as it was.
pub fn convert(dim: &Dimension, target: &Value) -> Value {
    let to = target.raw_value();
    match units::convert(dim.value, &dim.unit, &to) {
        Some(value) => Value::dimension(value, to),
        None => Value::Dimension(dim.clone()),
    }
}

pub fn percentage(dim: &Dimension) -> Value {
    Value::percentage(dim.value * 100.0)
}

/// Parse a quoted `#rgb` / `#rrggbb` string into a color.
///
/// The first character is skipped whatever it is.
pub fn color(value: &Value) -> Result<Color, EvalError> {
    let Value::Quoted(quoted) = value else {
        return Err(type_mismatch("Argument must be a string"));
    };
    let mut chars = quoted.value.chars();
    chars.next();
    Color::from_hex(chars.as_str()).ok_or_else(|| {
        invalid_argument("color", format!("invalid hex color `{}`", quoted.value))
    })
}

#[cfg(test)]
mod tests;

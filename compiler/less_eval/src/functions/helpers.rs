//! Argument validation shared by the builtins.

use less_values::{type_mismatch, Color, Dimension, EvalError, Value};

/// Require a color argument.
#[inline]
pub fn require_color<'a>(function: &str, value: &'a Value) -> Result<&'a Color, EvalError> {
    match value {
        Value::Color(c) => Ok(c),
        other => Err(type_mismatch(format!(
            "{function} expects a color, got {}",
            other.type_name()
        ))),
    }
}

/// Require a dimension argument.
#[inline]
pub fn require_dimension<'a>(function: &str, value: &'a Value) -> Result<&'a Dimension, EvalError> {
    match value {
        Value::Dimension(d) => Ok(d),
        other => Err(type_mismatch(format!(
            "{function} expects a number, got {}",
            other.type_name()
        ))),
    }
}

/// Optional trailing argument at `index`.
#[inline]
pub fn optional_arg(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index)
}

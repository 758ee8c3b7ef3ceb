//! Number extraction and clamping shared by the color and math builtins.

use less_values::{numbers_expected, EvalError, Value};

/// Something a color function can read a number from.
///
/// Builtins receive evaluated `Value`s, but color transforms feed plain
/// floats back into the same constructors; both go through this trait.
pub trait Numeric {
    /// Extract a number. Percentages become fractions (`50%` → `0.5`).
    fn as_number(&self) -> Result<f64, EvalError>;

    /// Like `as_number`, but percentages scale to `size` (`50%` of 256 → `128`).
    fn as_scaled(&self, _size: f64) -> Result<f64, EvalError> {
        self.as_number()
    }
}

impl Numeric for f64 {
    #[inline]
    fn as_number(&self) -> Result<f64, EvalError> {
        Ok(*self)
    }
}

impl Numeric for Value {
    fn as_number(&self) -> Result<f64, EvalError> {
        match self {
            Value::Dimension(d) if d.is_percentage() => Ok(d.value / 100.0),
            Value::Dimension(d) => Ok(d.value),
            Value::Color(_)
            | Value::Keyword(_)
            | Value::Quoted(_)
            | Value::Anonymous(_)
            | Value::Url(_) => Err(numbers_expected()),
        }
    }

    fn as_scaled(&self, size: f64) -> Result<f64, EvalError> {
        match self {
            Value::Dimension(d) if d.is_percentage() => Ok(d.value * size / 100.0),
            _ => self.as_number(),
        }
    }
}

/// Clamp to `[0, 1]`.
#[inline]
pub fn clamp(x: f64) -> f64 {
    x.max(0.0).min(1.0)
}

#[cfg(test)]
mod tests;

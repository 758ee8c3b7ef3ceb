//! Unit-preserving math functions.
//!
//! `math` is the shared wrapper: it pulls the number out of a dimension,
//! applies a scalar function, and puts a unit back on the result. Most
//! functions keep the argument's unit. Trigonometric functions first unify
//! the argument to radians and then force the result unit: `sin`, `cos`,
//! `tan` return a bare number and `asin`, `acos`, `atan` return `rad`.

use less_values::{
    math_takes_numbers, modulo_by_zero, type_mismatch, Dimension, EvalError, EvalResult, Value,
};

use super::units::unify;

/// Scalar function applied by the math dispatcher.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MathFn {
    Ceil,
    Floor,
    Sqrt,
    Abs,
    Round,
    Tan,
    Sin,
    Cos,
    Atan,
    Asin,
    Acos,
}

impl MathFn {
    pub const ALL: [MathFn; 11] = [
        MathFn::Ceil,
        MathFn::Floor,
        MathFn::Sqrt,
        MathFn::Abs,
        MathFn::Round,
        MathFn::Tan,
        MathFn::Sin,
        MathFn::Cos,
        MathFn::Atan,
        MathFn::Asin,
        MathFn::Acos,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            MathFn::Ceil => "ceil",
            MathFn::Floor => "floor",
            MathFn::Sqrt => "sqrt",
            MathFn::Abs => "abs",
            MathFn::Round => "round",
            MathFn::Tan => "tan",
            MathFn::Sin => "sin",
            MathFn::Cos => "cos",
            MathFn::Atan => "atan",
            MathFn::Asin => "asin",
            MathFn::Acos => "acos",
        }
    }

    pub fn from_name(name: &str) -> Option<MathFn> {
        MathFn::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Unit the result is tagged with, or `None` to keep the input's unit.
    pub const fn forced_unit(self) -> Option<&'static str> {
        match self {
            MathFn::Tan | MathFn::Sin | MathFn::Cos => Some(""),
            MathFn::Atan | MathFn::Asin | MathFn::Acos => Some("rad"),
            MathFn::Ceil | MathFn::Floor | MathFn::Sqrt | MathFn::Abs | MathFn::Round => None,
        }
    }

    /// Apply to a bare number. `digits` only matters for `Round`.
    pub fn apply(self, x: f64, digits: f64) -> f64 {
        match self {
            MathFn::Ceil => x.ceil(),
            MathFn::Floor => x.floor(),
            MathFn::Sqrt => x.sqrt(),
            MathFn::Abs => x.abs(),
            MathFn::Round => round_to_places(x, digits),
            MathFn::Tan => x.tan(),
            MathFn::Sin => x.sin(),
            MathFn::Cos => x.cos(),
            MathFn::Atan => x.atan(),
            MathFn::Asin => x.asin(),
            MathFn::Acos => x.acos(),
        }
    }
}

/// Lowest power of ten used when scaling during rounding.
const MIN_ROUND_EXPONENT: i32 = -60;

/// Places beyond which a scaled value is carried through a decimal string.
const MAX_EXACT_PLACES: i32 = 23;

/// `10^power`, exact for `0..=22`.
fn pow10(power: i32) -> f64 {
    if (0..=22).contains(&power) {
        10f64.powi(power)
    } else {
        10f64.powf(f64::from(power))
    }
}

/// `value * 10^power` for either sign of `power`.
fn scale(value: f64, power: i32) -> f64 {
    if power >= 0 {
        value * pow10(power)
    } else {
        value / pow10(power.saturating_neg())
    }
}

/// Round half away from zero to `digits` fraction digits (negative digits
/// round to tens, hundreds, ...).
///
/// The value is first pre-rounded to 15 significant digits, so `1.005`
/// rounds to `1.01` at two places. A value whose scaled form leaves the
/// range of exact integers comes back unchanged.
fn round_to_places(value: f64, digits: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let places = digits.trunc().clamp(-f64::from(i32::MAX), f64::from(i32::MAX)) as i32;
    let precision_places = 14 - value.abs().log10().floor() as i32;

    let scaled = if precision_places > places && precision_places - 15 < places {
        let precision = precision_places.max(MIN_ROUND_EXPONENT);
        let pre_rounded = scale(value, precision).round();
        let shift = (places - precision).max(MIN_ROUND_EXPONENT);
        pre_rounded / pow10(shift.saturating_abs())
    } else {
        let scaled = scale(value, places);
        if !scaled.is_finite() || scaled.abs() >= 1e15 {
            return value;
        }
        scaled
    };
    let rounded = scaled.round();

    if places.saturating_abs() < MAX_EXACT_PLACES {
        return scale(rounded, places.saturating_neg());
    }
    format!("{rounded:.6}e{}", places.saturating_neg())
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(value)
}

/// Apply `func` to a dimension, keeping or forcing the unit.
#[tracing::instrument(level = "trace", skip(value))]
pub fn math(func: MathFn, value: &Value, digits: f64) -> EvalResult {
    let Value::Dimension(dim) = value else {
        return Err(math_takes_numbers());
    };
    let (number, unit) = match func.forced_unit() {
        None => (dim.value, dim.unit.clone()),
        Some(forced) => (unify(dim).value, forced.to_string()),
    };
    Ok(Value::dimension(func.apply(number, digits), unit))
}

/// `round(n, digits?)`.
pub fn round(value: &Value, digits: Option<&Value>) -> EvalResult {
    let digits = match digits {
        Some(Value::Dimension(d)) => d.value,
        Some(_) => return Err(math_takes_numbers()),
        None => 0.0,
    };
    math(MathFn::Round, value, digits)
}

pub fn pi() -> Value {
    Value::number(std::f64::consts::PI)
}

/// `x` to the power `y`, in the unit of `x`.
pub fn pow(x: &Value, y: &Value) -> EvalResult {
    match (x, y) {
        (Value::Dimension(x), Value::Dimension(y)) => {
            Ok(Value::dimension(x.value.powf(y.value), x.unit.clone()))
        }
        _ => Err(type_mismatch("Arguments must be numbers")),
    }
}

/// Integer remainder of the truncated operands, in the unit of `a`.
///
/// The sign follows the dividend.
pub fn modulo(a: &Dimension, b: &Dimension) -> Result<Value, EvalError> {
    let dividend = a.value.trunc() as i64;
    let divisor = b.value.trunc() as i64;
    let rem = dividend
        .checked_rem(divisor)
        .ok_or_else(modulo_by_zero)?;
    Ok(Value::dimension(rem as f64, a.unit.clone()))
}

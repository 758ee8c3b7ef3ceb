//! The builtin function library.
//!
//! Builtins are grouped by concern. Each submodule exposes plain typed
//! functions; this module owns the name table and the `match`-based
//! dispatcher that unpacks call arguments into those functions.
//!
//! The function set is fixed, so dispatch is a direct `match` on the
//! lowercased name rather than a registry of trait objects.

pub mod blend;
pub mod channels;
pub mod coerce;
pub mod color_space;
pub mod datauri;
pub mod helpers;
pub mod math;
pub mod predicates;
pub mod strings;
pub mod transform;
pub mod units;

use std::sync::OnceLock;

use less_values::{argument_type, undefined_function, CallSite, Value};
use rustc_hash::FxHashMap;

use crate::builtins::{Builtins, CallResult};
use blend::BlendMode;
use helpers::{optional_arg, require_color, require_dimension};
use math::MathFn;

/// Accepted argument count of a builtin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    /// `None` for variadic functions.
    pub max: Option<usize>,
}

impl Arity {
    const fn exactly(n: usize) -> Self {
        Arity {
            min: n,
            max: Some(n),
        }
    }

    const fn between(min: usize, max: usize) -> Self {
        Arity {
            min,
            max: Some(max),
        }
    }

    const fn at_least(min: usize) -> Self {
        Arity { min, max: None }
    }

    pub fn accepts(self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

/// Every builtin with its arity. Sorted by concern, then name.
///
/// Consistency tests check that each entry dispatches.
pub const BUILTIN_FUNCTIONS: &[(&str, Arity)] = &[
    // color space
    ("hsl", Arity::exactly(3)),
    ("hsla", Arity::exactly(4)),
    ("hsv", Arity::exactly(3)),
    ("hsva", Arity::exactly(4)),
    ("rgb", Arity::exactly(3)),
    ("rgba", Arity::exactly(4)),
    // channels
    ("alpha", Arity::exactly(1)),
    ("argb", Arity::exactly(1)),
    ("blue", Arity::exactly(1)),
    ("green", Arity::exactly(1)),
    ("hue", Arity::exactly(1)),
    ("lightness", Arity::exactly(1)),
    ("luma", Arity::exactly(1)),
    ("red", Arity::exactly(1)),
    ("saturation", Arity::exactly(1)),
    // transforms
    ("contrast", Arity::between(1, 4)),
    ("darken", Arity::exactly(2)),
    ("desaturate", Arity::exactly(2)),
    ("fade", Arity::exactly(2)),
    ("fadein", Arity::exactly(2)),
    ("fadeout", Arity::exactly(2)),
    ("greyscale", Arity::exactly(1)),
    ("lighten", Arity::exactly(2)),
    ("mix", Arity::between(2, 3)),
    ("saturate", Arity::exactly(2)),
    ("shade", Arity::exactly(2)),
    ("spin", Arity::exactly(2)),
    ("tint", Arity::exactly(2)),
    // blend modes
    ("average", Arity::exactly(2)),
    ("difference", Arity::exactly(2)),
    ("exclusion", Arity::exactly(2)),
    ("hardlight", Arity::exactly(2)),
    ("multiply", Arity::exactly(2)),
    ("negation", Arity::exactly(2)),
    ("overlay", Arity::exactly(2)),
    ("screen", Arity::exactly(2)),
    ("softlight", Arity::exactly(2)),
    // math
    ("abs", Arity::exactly(1)),
    ("acos", Arity::exactly(1)),
    ("asin", Arity::exactly(1)),
    ("atan", Arity::exactly(1)),
    ("ceil", Arity::exactly(1)),
    ("cos", Arity::exactly(1)),
    ("floor", Arity::exactly(1)),
    ("mod", Arity::exactly(2)),
    ("pi", Arity::exactly(0)),
    ("pow", Arity::exactly(2)),
    ("round", Arity::between(1, 2)),
    ("sin", Arity::exactly(1)),
    ("sqrt", Arity::exactly(1)),
    ("tan", Arity::exactly(1)),
    // units
    ("color", Arity::exactly(1)),
    ("convert", Arity::exactly(2)),
    ("percentage", Arity::exactly(1)),
    ("unit", Arity::between(1, 2)),
    // type predicates
    ("iscolor", Arity::exactly(1)),
    ("isem", Arity::exactly(1)),
    ("iskeyword", Arity::exactly(1)),
    ("isnumber", Arity::exactly(1)),
    ("ispercentage", Arity::exactly(1)),
    ("ispixel", Arity::exactly(1)),
    ("isstring", Arity::exactly(1)),
    ("isurl", Arity::exactly(1)),
    // strings
    ("_percent", Arity::at_least(1)),
    ("e", Arity::exactly(1)),
    ("escape", Arity::exactly(1)),
    // files
    ("datauri", Arity::between(1, 2)),
];

static FUNCTION_TABLE: OnceLock<FxHashMap<&'static str, Arity>> = OnceLock::new();

/// Arity of the builtin called `name` (already lowercased).
pub fn lookup(name: &str) -> Option<Arity> {
    FUNCTION_TABLE
        .get_or_init(|| BUILTIN_FUNCTIONS.iter().copied().collect())
        .get(name)
        .copied()
}

/// Map a name as written to the table key: lowercase, with `%` spelled
/// `_percent`.
pub fn canonical_name(name: &str) -> String {
    if name == "%" {
        "_percent".to_string()
    } else {
        name.to_ascii_lowercase()
    }
}

#[inline]
fn some(value: impl Into<Value>) -> CallResult {
    Ok(Some(value.into()))
}

/// Run builtin `name` on arguments whose count already matches its arity.
pub(crate) fn dispatch(
    builtins: &Builtins,
    name: &str,
    args: &[Value],
    site: &CallSite,
) -> CallResult {
    let color = |i: usize| require_color(name, &args[i]);
    let amount = |i: usize| require_dimension(name, &args[i]);

    match name {
        // Color space
        "rgb" => some(color_space::rgb(&args[0], &args[1], &args[2])?),
        "rgba" => some(color_space::rgba(&args[0], &args[1], &args[2], &args[3])?),
        "hsl" => some(color_space::hsl(&args[0], &args[1], &args[2])?),
        "hsla" => some(color_space::hsla(&args[0], &args[1], &args[2], &args[3])?),
        "hsv" => some(color_space::hsv(&args[0], &args[1], &args[2])?),
        "hsva" => some(color_space::hsva(&args[0], &args[1], &args[2], &args[3])?),

        // Channels
        "hue" => some(channels::hue(color(0)?)),
        "saturation" => some(channels::saturation(color(0)?)),
        "lightness" => some(channels::lightness(color(0)?)),
        "red" => some(channels::red(color(0)?)),
        "green" => some(channels::green(color(0)?)),
        "blue" => some(channels::blue(color(0)?)),
        "alpha" => some(channels::alpha(color(0)?)),
        "luma" => some(channels::luma(color(0)?)),
        "argb" => some(channels::argb(color(0)?)),

        // Transforms
        "saturate" => some(transform::saturate(color(0)?, amount(1)?)),
        "desaturate" => some(transform::desaturate(color(0)?, amount(1)?)),
        "lighten" => some(transform::lighten(color(0)?, amount(1)?)),
        "darken" => {
            let Value::Color(c) = &args[0] else {
                return Err(argument_type("Color", &args[0], &site.function));
            };
            some(transform::darken(c, amount(1)?))
        }
        "fadein" => some(transform::fadein(color(0)?, amount(1)?)),
        "fadeout" => some(transform::fadeout(color(0)?, amount(1)?)),
        "fade" => some(transform::fade(color(0)?, amount(1)?)),
        "spin" => some(transform::spin(color(0)?, amount(1)?)),
        "mix" => {
            let weight = optional_arg(args, 2)
                .map(|w| require_dimension(name, w))
                .transpose()?;
            some(transform::mix(color(0)?, color(1)?, weight))
        }
        "tint" => some(transform::tint(color(0)?, amount(1)?)),
        "shade" => some(transform::shade(color(0)?, amount(1)?)),
        "greyscale" => some(transform::greyscale(color(0)?)),
        "contrast" => transform::contrast(
            &args[0],
            optional_arg(args, 1),
            optional_arg(args, 2),
            optional_arg(args, 3),
        ),

        // Blend modes
        "multiply" | "screen" | "overlay" | "softlight" | "hardlight" | "difference"
        | "exclusion" | "average" | "negation" => {
            let mode = BlendMode::from_name(name).ok_or_else(|| undefined_function(name))?;
            some(mode.blend(color(0)?, color(1)?))
        }

        // Math
        "ceil" | "floor" | "sqrt" | "abs" | "tan" | "sin" | "cos" | "atan" | "asin" | "acos" => {
            let func = MathFn::from_name(name).ok_or_else(|| undefined_function(name))?;
            some(math::math(func, &args[0], 0.0)?)
        }
        "round" => some(math::round(&args[0], optional_arg(args, 1))?),
        "pi" => some(math::pi()),
        "pow" => some(math::pow(&args[0], &args[1])?),
        "mod" => some(math::modulo(amount(0)?, amount(1)?)?),

        // Units
        "unit" => some(units::unit(
            amount(0)?,
            optional_arg(args, 1),
            builtins.css_options(),
        )),
        "convert" => some(units::convert(amount(0)?, &args[1])),
        "percentage" => some(units::percentage(amount(0)?)),
        "color" => some(units::color(&args[0])?),

        // Type predicates
        "iscolor" => some(predicates::iscolor(&args[0])),
        "isnumber" => some(predicates::isnumber(&args[0])),
        "isstring" => some(predicates::isstring(&args[0])),
        "iskeyword" => some(predicates::iskeyword(&args[0])),
        "isurl" => some(predicates::isurl(&args[0])),
        "ispixel" => some(predicates::ispixel(&args[0])),
        "ispercentage" => some(predicates::ispercentage(&args[0])),
        "isem" => some(predicates::isem(&args[0])),

        // Strings
        "_percent" => some(strings::format(
            &args[0],
            &args[1..],
            builtins.css_options(),
        )),
        "e" => some(strings::e(&args[0])),
        "escape" => some(strings::escape(&args[0])),

        // Files
        "datauri" => some(datauri::datauri(
            &args[0],
            optional_arg(args, 1),
            builtins.mode(),
            builtins.file_loader(),
        )),

        _ => Err(undefined_function(name)),
    }
}

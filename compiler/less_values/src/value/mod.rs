//! Computed values produced and consumed by the builtin functions.
//!
//! The variant set is closed: builtins match exhaustively on `Value` and
//! either handle a variant or report an error for it. There is no boolean
//! variant; booleans travel as the keywords `true` and `false` so that the
//! surrounding language's guards keep working on them.
//!
//! ## Construction
//!
//! ```text
//! let width = Value::dimension(10.0, "px");
//! let red = Value::rgb(255.0, 0.0, 0.0);
//! let yes = Value::boolean(true);          // Keyword("true")
//! let s = Value::quoted("a b");            // raw `"a b"`, value `a b`
//! ```

mod color;
mod number;

use std::fmt;

pub use color::{Color, Hsl};
pub use number::format_number;

use crate::CssOptions;

/// A number with a (possibly empty) unit.
///
/// Units compare as exact strings; `%` switches several builtins into
/// percentage semantics.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: String,
}

impl Dimension {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Dimension {
            value,
            unit: unit.into(),
        }
    }

    /// A dimension without a unit.
    pub fn unitless(value: f64) -> Self {
        Dimension {
            value,
            unit: String::new(),
        }
    }

    #[inline]
    pub fn is_unit(&self, unit: &str) -> bool {
        self.unit == unit
    }

    #[inline]
    pub fn is_percentage(&self) -> bool {
        self.is_unit("%")
    }

    pub fn to_css(&self) -> String {
        format!("{}{}", format_number(self.value), self.unit)
    }
}

/// A string literal as written in the source.
///
/// `raw` keeps the quote characters, `value` is the text between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quoted {
    pub raw: String,
    pub value: String,
}

impl Quoted {
    pub fn new(raw: impl Into<String>, value: impl Into<String>) -> Self {
        Quoted {
            raw: raw.into(),
            value: value.into(),
        }
    }

    /// Wrap `value` in double quotes.
    pub fn double(value: impl Into<String>) -> Self {
        let value = value.into();
        Quoted {
            raw: format!("\"{value}\""),
            value,
        }
    }
}

/// Computed value in a style sheet.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Number with an optional unit, e.g. `10px`, `50%`, `1.5`.
    Dimension(Dimension),
    /// RGB triple plus alpha. Not clamped.
    Color(Color),
    /// Identifier, e.g. `bold`. Also encodes booleans.
    Keyword(String),
    /// Quoted string.
    Quoted(Quoted),
    /// Opaque text emitted verbatim.
    Anonymous(String),
    /// `url(...)` wrapping another value.
    Url(Box<Value>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn dimension(value: f64, unit: impl Into<String>) -> Self {
        Value::Dimension(Dimension::new(value, unit))
    }

    /// Unit-less number.
    #[inline]
    pub fn number(value: f64) -> Self {
        Value::Dimension(Dimension::unitless(value))
    }

    #[inline]
    pub fn percentage(value: f64) -> Self {
        Value::dimension(value, "%")
    }

    #[inline]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Value::Color(Color::new([r, g, b], 1.0))
    }

    #[inline]
    pub fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Value::Color(Color::new([r, g, b], alpha))
    }

    #[inline]
    pub fn keyword(name: impl Into<String>) -> Self {
        Value::Keyword(name.into())
    }

    /// Boolean as the keyword `true` or `false`.
    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Keyword(if b { "true" } else { "false" }.to_string())
    }

    /// Double-quoted string.
    #[inline]
    pub fn quoted(value: impl Into<String>) -> Self {
        Value::Quoted(Quoted::double(value))
    }

    #[inline]
    pub fn anonymous(text: impl Into<String>) -> Self {
        Value::Anonymous(text.into())
    }

    #[inline]
    pub fn url(inner: Value) -> Self {
        Value::Url(Box::new(inner))
    }
}

// Value Methods

impl Value {
    /// Name of the variant, as shown in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Dimension(_) => "Dimension",
            Value::Color(_) => "Color",
            Value::Keyword(_) => "Keyword",
            Value::Quoted(_) => "Quoted",
            Value::Anonymous(_) => "Anonymous",
            Value::Url(_) => "Url",
        }
    }

    pub fn as_dimension(&self) -> Option<&Dimension> {
        match self {
            Value::Dimension(d) => Some(d),
            _ => None,
        }
    }

    /// Whether this is the keyword `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Keyword(k) if k == "true")
    }

    /// The value's string payload without CSS decoration.
    ///
    /// Quoted strings lose their quotes, dimensions lose their unit, URLs
    /// yield their inner value. Colors have no string payload and fall back
    /// to their CSS form.
    pub fn raw_value(&self) -> String {
        match self {
            Value::Dimension(d) => format_number(d.value),
            Value::Color(c) => c.to_css(&CssOptions::default()),
            Value::Keyword(s) | Value::Anonymous(s) => s.clone(),
            Value::Quoted(q) => q.value.clone(),
            Value::Url(inner) => inner.raw_value(),
        }
    }

    /// Render as CSS.
    pub fn to_css(&self, options: &CssOptions) -> String {
        match self {
            Value::Dimension(d) => d.to_css(),
            Value::Color(c) => c.to_css(options),
            Value::Keyword(s) | Value::Anonymous(s) => s.clone(),
            Value::Quoted(q) => q.raw.clone(),
            Value::Url(inner) => format!("url({})", inner.to_css(options)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(&CssOptions::default()))
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<Dimension> for Value {
    fn from(dim: Dimension) -> Self {
        Value::Dimension(dim)
    }
}

#[cfg(test)]
mod tests;

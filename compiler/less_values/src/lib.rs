//! Less Values - the computed-value model of the Less function library.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Dimension`, `Color`, `Quoted`, `Hsl`)
//! - CSS rendering of values (`CssOptions`)
//! - Evaluation error types (`EvalError`, `EvalErrorKind`, `EvalResult`)
//! - Explicit call context (`CallSite`) threaded into every builtin
//!
//! Values are immutable: every builtin returns a fresh `Value` rather than
//! editing an argument. Colors are deliberately not clamped on construction;
//! clamping happens where a builtin asks for it and during CSS rendering.

mod call_site;
mod css_options;
mod errors;
mod value;

pub use call_site::CallSite;
pub use css_options::CssOptions;
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use value::{format_number, Color, Dimension, Hsl, Quoted, Value};

// Re-export error constructors for use by other crates
pub use errors::{
    argument_type, invalid_argument, math_takes_numbers, modulo_by_zero, numbers_expected,
    type_mismatch, undefined_function, wrong_arg_count,
};

pub use less_ir::Span;

//! Error types for builtin evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories so the driving evaluator
//! can match on the failure instead of parsing messages. Factory functions
//! (e.g., `numbers_expected()`) are the public API; they populate both `kind`
//! and `message`.
//!
//! All errors are fatal to the current evaluation step. Builtins never
//! recover locally; the single silent fallback (`datauri` on a failed read)
//! does not go through this module at all.

use crate::value::Value;
use crate::CssOptions;
use less_ir::Span;
use std::fmt;

/// Result of evaluating a builtin that always produces a value.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A value could not be coerced to the kind a numeric or color
    /// function needs.
    TypeMismatch { message: String },

    /// A function that requires a specific variant received another one.
    ArgumentType {
        expected: String,
        got: String,
        function: String,
        /// CSS rendering of the offending argument.
        rendered: String,
    },

    ArityMismatch {
        name: String,
        min: usize,
        max: Option<usize>,
        got: usize,
    },

    UndefinedFunction { name: String },

    ModuloByZero,

    /// An argument had the right type but an unusable value.
    InvalidArgument { function: String, message: String },

    /// Catch-all for errors not categorized into structured kinds.
    Custom { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { message } | Self::Custom { message } => f.write_str(message),
            Self::ArgumentType {
                expected,
                got,
                function,
                rendered,
            } => write!(
                f,
                "Object of type {got} passed to {function} function. Expecting `{expected}`. {rendered}"
            ),
            Self::ArityMismatch {
                name,
                min,
                max,
                got,
            } => {
                let arg_word = |n: usize| if n == 1 { "argument" } else { "arguments" };
                match max {
                    Some(max) if max == min => {
                        write!(f, "{name} expects {min} {}, got {got}", arg_word(*min))
                    }
                    Some(max) => write!(f, "{name} expects {min} to {max} arguments, got {got}"),
                    None => write!(
                        f,
                        "{name} expects at least {min} {}, got {got}",
                        arg_word(*min)
                    ),
                }
            }
            Self::UndefinedFunction { name } => write!(f, "undefined function: {name}"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::InvalidArgument { function, message } => write!(f, "{function}: {message}"),
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Builtin function name.
    pub name: String,
    /// Source location of the call.
    pub span: Option<Span>,
    /// 1-based source line of the call, when the evaluator knows it.
    pub line: Option<u32>,
}

/// Snapshot of the call chain at an error site.
///
/// Builtins push exactly one frame (their own call site); an evaluator that
/// tracks mixin calls can append its own frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    /// The innermost frame: the call that raised the error.
    pub fn innermost(&self) -> Option<&BacktraceFrame> {
        self.frames.first()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(line) = frame.line {
                write!(f, " on line {line}")?;
            }
            if let Some(span) = frame.span {
                write!(f, " at {span}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory errors.
    pub message: String,
    /// Source location of the failing call.
    pub span: Option<Span>,
    /// Call chain leading to the error.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer a specific factory function when one fits.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            span: None,
            backtrace: None,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            backtrace: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(frame) = self.backtrace.as_ref().and_then(EvalBacktrace::innermost) {
            write!(f, " (in {}", frame.name)?;
            if let Some(line) = frame.line {
                write!(f, " on line {line}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

// Coercion Errors

/// Generic type mismatch with a caller-supplied message.
#[cold]
pub fn type_mismatch(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        message: message.into(),
    })
}

/// A color or numeric function received something that is not a number.
#[cold]
pub fn numbers_expected() -> EvalError {
    type_mismatch("color functions take numbers as parameters")
}

/// A math function received something that is not a number.
#[cold]
pub fn math_takes_numbers() -> EvalError {
    type_mismatch("math functions take numbers as parameters")
}

// Argument Errors

/// A function required a specific variant and got `actual` instead.
#[cold]
pub fn argument_type(expected: &str, actual: &Value, function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentType {
        expected: expected.to_string(),
        got: actual.type_name().to_string(),
        function: function.to_string(),
        rendered: actual.to_css(&CssOptions::default()),
    })
}

/// Wrong number of arguments. `max` is `None` for variadic functions.
#[cold]
pub fn wrong_arg_count(name: &str, min: usize, max: Option<usize>, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        min,
        max,
        got,
    })
}

#[cold]
pub fn invalid_argument(function: &str, message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidArgument {
        function: function.to_string(),
        message: message.into(),
    })
}

// Lookup and Arithmetic Errors

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

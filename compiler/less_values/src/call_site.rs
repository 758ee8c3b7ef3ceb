//! Explicit call context for builtin invocations.
//!
//! The evaluator builds a `CallSite` for every function call it dispatches
//! and passes it down. Errors raised inside a builtin are stamped with it on
//! the way out, so messages can name the function and source position
//! without any stack introspection.

use less_ir::Span;

use crate::errors::{BacktraceFrame, EvalBacktrace, EvalError};

/// Where a builtin was called from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    /// Name of the function being called, as written.
    pub function: String,
    pub span: Option<Span>,
    /// 1-based line of the call.
    pub line: Option<u32>,
}

impl CallSite {
    pub fn new(function: impl Into<String>) -> Self {
        CallSite {
            function: function.into(),
            span: None,
            line: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Resolve the line from the span against the style sheet source.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        if let Some(span) = self.span {
            self.line = Some(span.line_col(source).line);
        }
        self
    }

    pub fn frame(&self) -> BacktraceFrame {
        BacktraceFrame {
            name: self.function.clone(),
            span: self.span,
            line: self.line,
        }
    }

    /// Stamp this call site onto an error leaving the builtin.
    ///
    /// An existing span is kept (it is more precise); the call site's frame
    /// becomes the innermost backtrace frame unless one is already present.
    pub fn attach(&self, mut err: EvalError) -> EvalError {
        if err.span.is_none() {
            err.span = self.span;
        }
        match err.backtrace.as_mut() {
            Some(bt) if !bt.is_empty() => {}
            _ => err.backtrace = Some(EvalBacktrace::new(vec![self.frame()])),
        }
        err
    }
}

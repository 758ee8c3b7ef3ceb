//! Evaluation modes for the builtin library.
//!
//! A normal compile may read files for `datauri`; a sandboxed evaluation
//! (untrusted style sheets, previews, deterministic tests) must not touch
//! the file system at all.

/// Evaluation mode. Determines which side effects builtins may perform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Standard compilation: file reads allowed.
    #[default]
    Compile,
    /// No I/O. `datauri` always takes its fallback path.
    Sandboxed,
}

impl EvalMode {
    /// Whether builtins may read files.
    #[inline]
    pub fn allows_io(&self) -> bool {
        matches!(self, Self::Compile)
    }
}

#[cfg(test)]
mod tests;

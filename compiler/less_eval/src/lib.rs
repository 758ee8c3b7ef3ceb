//! Less Eval - builtin functions for the Less style-sheet evaluator.
//!
//! The tree-walking evaluator resolves a function call to a name, evaluates
//! its arguments, and hands both to [`Builtins::call`]. Every builtin is a
//! pure function of its arguments except `datauri`, which reads one file
//! through the configured [`FileLoaderImpl`].
//!
//! # Architecture
//!
//! - `functions`: the builtins, grouped by concern, plus the name table
//! - `Builtins`: dispatch entry point holding mode, CSS options and loader
//! - `EvalMode`: whether builtins may touch the file system
//! - `file_loader`: the file-read collaborator used by `datauri`
//!
//! # Re-exports
//!
//! Value and error types are re-exported from `less_values` for convenience.

mod builtins;
mod eval_mode;
pub mod file_loader;
pub mod functions;

pub use less_values::{
    CallSite, Color, CssOptions, Dimension, EvalError, EvalErrorKind, EvalResult, Hsl, Quoted,
    Value,
};

pub use builtins::{Builtins, BuiltinsBuilder, CallResult};
pub use eval_mode::EvalMode;
pub use file_loader::{
    disk_loader, memory_loader, DiskFileLoader, FileLoaderImpl, LoadError, MemoryFileLoader,
    SharedFileLoader,
};
pub use functions::coerce::{clamp, Numeric};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=less_eval=debug` or `RUST_LOG=less_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

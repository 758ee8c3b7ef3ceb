//! Entry point the evaluator calls builtins through.

mod builder;

pub use builder::BuiltinsBuilder;

use less_values::{undefined_function, wrong_arg_count, CallSite, CssOptions, EvalError, Value};

use crate::eval_mode::EvalMode;
use crate::file_loader::{disk_loader, FileLoaderImpl, SharedFileLoader};
use crate::functions;

/// Result of a builtin call.
///
/// `Ok(None)` means the builtin does not apply to these arguments and the
/// call should be emitted as written (e.g. `contrast(3.2)` as a CSS filter).
pub type CallResult = Result<Option<Value>, EvalError>;

/// The builtin function library, configured for one evaluation.
///
/// Holds no per-call state; one instance can serve any number of calls, and
/// independent compiles can each own one.
#[derive(Clone)]
pub struct Builtins {
    mode: EvalMode,
    css: CssOptions,
    loader: SharedFileLoader,
}

impl Builtins {
    /// Compile mode, default CSS options, reading files from disk.
    pub fn new() -> Self {
        Builtins {
            mode: EvalMode::default(),
            css: CssOptions::default(),
            loader: disk_loader(),
        }
    }

    pub fn builder() -> BuiltinsBuilder {
        BuiltinsBuilder::new()
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    pub fn css_options(&self) -> &CssOptions {
        &self.css
    }

    pub fn file_loader(&self) -> &FileLoaderImpl {
        &self.loader
    }

    /// Whether `name` (as written) is a builtin.
    pub fn has(&self, name: &str) -> bool {
        functions::lookup(&functions::canonical_name(name)).is_some()
    }

    /// Call builtin `name` with evaluated arguments.
    ///
    /// Names are case-insensitive and `%` is accepted for `_percent`. Any
    /// error leaving the builtin carries `site`'s span and a backtrace frame.
    #[tracing::instrument(level = "debug", skip(self, args, site), fields(argc = args.len()))]
    pub fn call(&self, name: &str, args: &[Value], site: &CallSite) -> CallResult {
        let canonical = functions::canonical_name(name);
        let Some(arity) = functions::lookup(&canonical) else {
            tracing::trace!(name, "not a builtin");
            return Err(site.attach(undefined_function(name)));
        };
        if !arity.accepts(args.len()) {
            return Err(site.attach(wrong_arg_count(
                name,
                arity.min,
                arity.max,
                args.len(),
            )));
        }
        functions::dispatch(self, &canonical, args, site).map_err(|err| site.attach(err))
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

//! `BuiltinsBuilder` for configuring a `Builtins` instance.

use less_values::CssOptions;

use super::Builtins;
use crate::eval_mode::EvalMode;
use crate::file_loader::{disk_loader, SharedFileLoader};

/// Builder for `Builtins`.
///
/// Defaults: `EvalMode::Compile`, uncompressed output, disk file loader.
#[derive(Default)]
pub struct BuiltinsBuilder {
    mode: EvalMode,
    css: CssOptions,
    loader: Option<SharedFileLoader>,
}

impl BuiltinsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation mode.
    ///
    /// `EvalMode::Sandboxed` keeps `datauri` off the file system whatever
    /// loader is configured.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the options used when builtins render values as CSS.
    #[must_use]
    pub fn css_options(mut self, css: CssOptions) -> Self {
        self.css = css;
        self
    }

    #[must_use]
    pub fn file_loader(mut self, loader: SharedFileLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn build(self) -> Builtins {
        Builtins {
            mode: self.mode,
            css: self.css,
            loader: self.loader.unwrap_or_else(disk_loader),
        }
    }
}

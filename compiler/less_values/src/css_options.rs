//! Output options that affect how values render as CSS.

/// CSS rendering options.
///
/// Mirrors the compiler's `compress` switch: compressed output drops optional
/// whitespace and shortens hex colors where possible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CssOptions {
    pub compress: bool,
}

impl CssOptions {
    pub const fn compressed() -> Self {
        CssOptions { compress: true }
    }

    /// Separator used between function arguments, e.g. in `rgba(...)`.
    #[inline]
    pub const fn comma(&self) -> &'static str {
        if self.compress {
            ","
        } else {
            ", "
        }
    }
}

//! `datauri`: inline a file as a `data:` URL.
//!
//! This is the only builtin that performs I/O. Every failure (sandboxed
//! mode, missing file, unreadable file, empty file) falls back to
//! `url(<path>)` instead of raising an error.

use data_encoding::BASE64;
use less_values::Value;

use crate::file_loader::FileLoaderImpl;
use crate::EvalMode;

use super::strings::raw_url_encode;

const BASE64_SUFFIX: &str = ";base64";

/// `datauri(mimetype, path)` or `datauri(path)`.
///
/// A `;base64` suffix on the MIME type selects base64 over percent-encoding.
/// With one argument that argument is both the MIME type and the path.
pub fn datauri(
    first: &Value,
    path: Option<&Value>,
    mode: EvalMode,
    loader: &FileLoaderImpl,
) -> Value {
    let mime = first.raw_value();
    let path = path.map_or_else(|| mime.clone(), Value::raw_value);
    let use_base64 = mime.ends_with(BASE64_SUFFIX);

    let fallback = || Value::url(Value::anonymous(path.as_str()));

    if !mode.allows_io() {
        tracing::debug!(%path, "datauri: file access disabled in sandboxed mode");
        return fallback();
    }

    let content = match loader.load(&path) {
        Ok(content) if content.is_empty() => {
            tracing::debug!(%path, "datauri: empty file, keeping url");
            return fallback();
        }
        Ok(content) => content,
        Err(err) => {
            tracing::debug!(%path, error = %err, "datauri: read failed, keeping url");
            return fallback();
        }
    };

    let encoded = if use_base64 {
        BASE64.encode(&content)
    } else {
        raw_url_encode(&content)
    };
    Value::url(Value::anonymous(format!("'data:{mime},{encoded}'")))
}

#[cfg(test)]
mod tests;

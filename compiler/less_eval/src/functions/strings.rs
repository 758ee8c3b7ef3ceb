//! String templating and escaping.

use std::fmt::Write;

use less_values::{CssOptions, Value};

/// `%(template, args...)`: printf-style substitution.
///
/// Each argument replaces the first `%s`, `%d` or `%a` token left in the
/// string (case-insensitive). `s` tokens take the argument's raw value,
/// `d` and `a` its CSS form. Uppercase tokens URL-encode the substituted
/// text. Once every argument is placed, `%%` collapses to `%`.
pub fn format(template: &Value, args: &[Value], options: &CssOptions) -> Value {
    let mut out = template.raw_value();
    for arg in args {
        let Some(at) = find_token(&out) else {
            continue;
        };
        let letter = char::from(out.as_bytes()[at + 1]);
        let text = if letter.eq_ignore_ascii_case(&'s') {
            arg.raw_value()
        } else {
            arg.to_css(options)
        };
        let text = if letter.is_ascii_uppercase() {
            url_encode(&text)
        } else {
            text
        };
        out.replace_range(at..at + 2, &text);
    }
    Value::quoted(out.replace("%%", "%"))
}

/// Byte offset of the first `%s`/`%d`/`%a` token, any case.
fn find_token(s: &str) -> Option<usize> {
    s.as_bytes().windows(2).position(|pair| {
        pair[0] == b'%' && matches!(pair[1].to_ascii_lowercase(), b's' | b'd' | b'a')
    })
}

/// `e(str)`: the raw string, unquoted.
pub fn e(value: &Value) -> Value {
    Value::anonymous(value.raw_value())
}

/// `escape(str)`: form-encoded raw string.
pub fn escape(value: &Value) -> Value {
    Value::anonymous(url_encode(&value.raw_value()))
}

/// Form URL encoding: space becomes `+`, and everything outside
/// `A-Za-z0-9-_.` becomes `%XX`.
pub fn url_encode(s: &str) -> String {
    encode(s.as_bytes(), |b| b.is_ascii_alphanumeric() || b"-_.".contains(&b), true)
}

/// RFC 3986 encoding: everything outside `A-Za-z0-9-_.~` becomes `%XX`.
pub fn raw_url_encode(bytes: &[u8]) -> String {
    encode(bytes, |b| b.is_ascii_alphanumeric() || b"-_.~".contains(&b), false)
}

fn encode(bytes: &[u8], unreserved: impl Fn(u8) -> bool, plus_for_space: bool) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if unreserved(b) {
            out.push(char::from(b));
        } else if b == b' ' && plus_for_space {
            out.push('+');
        } else {
            write!(out, "%{b:02X}").ok();
        }
    }
    out
}

#[cfg(test)]
mod tests;

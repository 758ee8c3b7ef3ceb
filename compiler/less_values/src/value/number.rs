//! Number formatting for CSS output.

/// Digits kept after the decimal point when rendering.
const PRECISION: i32 = 8;

/// Format a number the way it appears in CSS.
///
/// Integral values print without a fraction; other values are rounded to
/// eight fraction digits with trailing zeros trimmed. Negative zero prints
/// as `0`.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let scale = 10f64.powi(PRECISION);
    let rounded = (n * scale).round() / scale;
    let n = if rounded.is_finite() { rounded } else { n };

    let mut out = format!("{n:.8}");
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out = "0".to_string();
    }
    out
}

//! RGB colors and their HSL view.

use crate::CssOptions;

use super::number::format_number;

/// RGB color with alpha.
///
/// Channels are conventionally in 0..=255 and alpha in 0..=1, but neither is
/// clamped here: blend modes and arithmetic may push them out of range, and
/// that is preserved until CSS rendering.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub rgb: [f64; 3],
    pub alpha: f64,
}

/// Hue/saturation/lightness scratch representation.
///
/// `h` is in degrees and is not normalized; `s`, `l`, `a` are fractions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Color {
    #[inline]
    pub const fn new(rgb: [f64; 3], alpha: f64) -> Self {
        Color { rgb, alpha }
    }

    pub const fn white() -> Self {
        Color::new([255.0, 255.0, 255.0], 1.0)
    }

    pub const fn black() -> Self {
        Color::new([0.0, 0.0, 0.0], 1.0)
    }

    /// Parse `rrggbb` or `rgb` hex digits (no leading `#`).
    pub fn from_hex(hex: &str) -> Option<Color> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).ok().map(f64::from);
        let rgb = match hex.len() {
            6 => [
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            ],
            3 => {
                // `#abc` is shorthand for `#aabbcc`
                let mut rgb = [0.0; 3];
                for (slot, i) in rgb.iter_mut().zip(0..3) {
                    *slot = channel(&hex[i..=i])? * 17.0;
                }
                rgb
            }
            _ => return None,
        };
        Some(Color::new(rgb, 1.0))
    }

    /// Convert to HSL.
    ///
    /// On ties for the maximum channel, hue is derived from the first of
    /// red, green, blue that holds the maximum. Achromatic colors get
    /// hue 0 and saturation 0.
    pub fn to_hsl(&self) -> Hsl {
        let [r, g, b] = self.rgb.map(|c| c / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l,
                a: self.alpha,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: h / 6.0 * 360.0,
            s,
            l,
            a: self.alpha,
        }
    }

    /// `#aarrggbb` with alpha scaled to 0..=255.
    pub fn to_argb(&self) -> String {
        let mut out = String::with_capacity(9);
        out.push('#');
        out.push_str(&hex_channel(self.alpha * 255.0));
        for c in self.rgb {
            out.push_str(&hex_channel(c));
        }
        out
    }

    /// Relative luminance from the channel values, ignoring alpha.
    pub fn luminance(&self) -> f64 {
        let [r, g, b] = self.rgb;
        0.2126 * (r / 255.0) + 0.7152 * (g / 255.0) + 0.0722 * (b / 255.0)
    }

    /// Render as `#rrggbb`, or `rgba(...)` when translucent.
    ///
    /// Hex output clamps channels to 0..=255; `rgba(...)` only rounds them.
    pub fn to_css(&self, options: &CssOptions) -> String {
        if self.alpha < 1.0 {
            let sep = options.comma();
            let channels: Vec<String> = self
                .rgb
                .iter()
                .map(|c| format_number(c.round()))
                .collect();
            return format!(
                "rgba({}{sep}{})",
                channels.join(sep),
                format_number(self.alpha)
            );
        }

        let hex: String = self.rgb.iter().map(|c| hex_channel(*c)).collect();
        if options.compress {
            let b = hex.as_bytes();
            if b[0] == b[1] && b[2] == b[3] && b[4] == b[5] {
                let short: String = [b[0], b[2], b[4]].iter().map(|&c| char::from(c)).collect();
                return format!("#{short}");
            }
        }
        format!("#{hex}")
    }
}

/// Round, clamp to a byte, and format as two lowercase hex digits.
fn hex_channel(c: f64) -> String {
    let byte = c.round().clamp(0.0, 255.0) as u8;
    format!("{byte:02x}")
}

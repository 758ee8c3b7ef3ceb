//! Per-channel blend modes.
//!
//! Every mode combines the red, green and blue channels of two colors
//! independently and returns an opaque color. Results are not clamped, so
//! a mode may produce channels outside 0..=255.

use less_values::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlendMode {
    Multiply,
    Screen,
    Overlay,
    Softlight,
    Hardlight,
    Difference,
    Exclusion,
    Average,
    Negation,
}

impl BlendMode {
    pub const ALL: [BlendMode; 9] = [
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Softlight,
        BlendMode::Hardlight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Average,
        BlendMode::Negation,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Softlight => "softlight",
            BlendMode::Hardlight => "hardlight",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Average => "average",
            BlendMode::Negation => "negation",
        }
    }

    pub fn from_name(name: &str) -> Option<BlendMode> {
        BlendMode::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Combine one channel of the first color (`a`) with the second (`b`).
    pub fn channel(self, a: f64, b: f64) -> f64 {
        match self {
            BlendMode::Multiply => a * b / 255.0,
            BlendMode::Screen => 255.0 - (255.0 - a) * (255.0 - b) / 255.0,
            BlendMode::Overlay => {
                if a < 128.0 {
                    2.0 * a * b / 255.0
                } else {
                    255.0 - 2.0 * (255.0 - a) * (255.0 - b) / 255.0
                }
            }
            BlendMode::Softlight => {
                let t = b * a / 255.0;
                t + a * (255.0 - (255.0 - a) * (255.0 - b) / 255.0 - t) / 255.0
            }
            BlendMode::Hardlight => {
                if b < 128.0 {
                    2.0 * b * a / 255.0
                } else {
                    255.0 - 2.0 * (255.0 - b) * (255.0 - a) / 255.0
                }
            }
            BlendMode::Difference => (a - b).abs(),
            // The first channel appears twice; this is not textbook exclusion.
            BlendMode::Exclusion => a + b * (255.0 - a - a) / 255.0,
            BlendMode::Average => (a + b) / 2.0,
            BlendMode::Negation => 255.0 - (255.0 - b - a).abs(),
        }
    }

    /// Blend two colors. Alpha of the inputs is ignored; the result is opaque.
    pub fn blend(self, first: &Color, second: &Color) -> Color {
        let [r1, g1, b1] = first.rgb;
        let [r2, g2, b2] = second.rgb;
        Color::new(
            [
                self.channel(r1, r2),
                self.channel(g1, g2),
                self.channel(b1, b2),
            ],
            1.0,
        )
    }
}

//! Model a color with red, green and blue components in `[0, 1]`.

use crate::color::{Argb, Component, Components};
use crate::math::unit_to_u8;

colorsliders_macros::gen_model! {
    /// A color specified with red, green and blue components, each in
    /// `[0, 1]`.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

/// Grayscale values at or above this are light enough for black text. Higher
/// than the midpoint to account for gamma.
const DARK_THRESHOLD: u8 = 186;

impl From<Argb> for Rgb {
    fn from(value: Argb) -> Self {
        Components(
            value.red() as Component,
            value.green() as Component,
            value.blue() as Component,
        )
        .map(|c| c / 255.0)
        .into()
    }
}

impl From<Rgb> for Argb {
    /// Pack the components, rounding to the nearest 8-bit value. The result
    /// is always opaque.
    fn from(value: Rgb) -> Self {
        Argb::opaque(
            unit_to_u8(value.red),
            unit_to_u8(value.green),
            unit_to_u8(value.blue),
        )
    }
}

impl Argb {
    /// The perceived brightness of the color in `0..=255`, ignoring alpha.
    pub fn grayscale(self) -> u8 {
        let gray = 0.299 * self.red() as f64
            + 0.587 * self.green() as f64
            + 0.114 * self.blue() as f64;
        gray as u8
    }

    /// Returns true if white text reads better than black on this color.
    pub fn is_dark(self) -> bool {
        self.grayscale() < DARK_THRESHOLD
    }

    /// White or black, whichever is readable on top of this color.
    pub fn readable_text_color(self) -> Argb {
        if self.is_dark() {
            Argb::WHITE
        } else {
            Argb::BLACK
        }
    }
}

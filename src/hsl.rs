//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

colorsliders_macros::gen_model! {
    /// A color specified with the HSL notation. Hue is in degrees in
    /// `[0, 360)`, saturation and lightness are in `[0, 1]`.
    pub struct Hsl {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

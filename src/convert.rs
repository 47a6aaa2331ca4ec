//! Conversions between the [`Rgb`] and [`Hsl`] models and the packed
//! [`Argb`] form.
//!
//! NOTE: Unlike CSS, a hue is never missing. Achromatic colors convert to a
//!       hue and saturation of 0, so every color has three usable components
//!       to put on a slider.

use crate::{
    color::{Argb, Components},
    hsl::Hsl,
    rgb::Rgb,
};

impl Rgb {
    /// Convert a color specified with RGB components to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB components.
    pub fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

impl From<Argb> for Hsl {
    fn from(value: Argb) -> Self {
        Rgb::from(value).to_hsl()
    }
}

impl From<Hsl> for Argb {
    fn from(value: Hsl) -> Self {
        value.to_rgb().into()
    }
}

impl From<Components> for Argb {
    /// Treat the components as RGB.
    fn from(value: Components) -> Self {
        Rgb::from(value).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if almost_zero(delta) {
            0.0
        } else {
            let sector = if max == red {
                ((green - blue) / delta) % 6.0
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            normalize_hue(sector * 60.0)
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if almost_zero(delta) {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Components(
            hue,
            saturation.clamp(0.0, 1.0),
            lightness.clamp(0.0, 1.0),
        )
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0);
        let saturation = from.1.clamp(0.0, 1.0);
        let lightness = from.2.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let m = lightness - 0.5 * chroma;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

        let (red, green, blue) = match (hue / 60.0) as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Components(red + m, green + m, blue + m)
    }
}

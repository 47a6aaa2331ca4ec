//! The color modes a [`ColorModel`](crate::ColorModel) can hold its
//! components in, and the codecs that turn each component into the integer
//! shown on a slider.

use crate::color::{Channel, Component};
use crate::error::Error;

/// Describes how a single component is displayed as an integer.
///
/// The display value is `round(component * scale)`, limited to `0..=max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataType {
    /// The largest display value.
    pub max: i32,
    /// Multiplier from component to display value.
    pub scale: Component,
    /// Unit shown after the display value.
    pub suffix: &'static str,
}

impl DataType {
    /// An 8-bit channel, `0..=255`.
    pub const HEX: DataType = DataType {
        max: 255,
        scale: 255.0,
        suffix: "",
    };

    /// A percentage, `0..=100`.
    pub const PERCENT: DataType = DataType {
        max: 100,
        scale: 100.0,
        suffix: "%",
    };

    /// An angle in whole degrees. Components are already in degrees.
    pub const DEGREE: DataType = DataType {
        max: 359,
        scale: 1.0,
        suffix: "°",
    };

    /// Convert a component to its display value.
    pub fn to_display(&self, component: Component) -> i32 {
        let value = (component * self.scale).round();
        if value.is_nan() {
            return 0;
        }
        // Float to int casts saturate.
        (value as i32).clamp(0, self.max)
    }

    /// Convert a display value to a component. Values outside `0..=max` are
    /// clamped.
    pub fn from_display(&self, value: i32) -> Component {
        value.clamp(0, self.max) as Component / self.scale
    }
}

/// The color space the components of a color are interpreted in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// Red, green and blue, each in `[0, 1]`.
    #[default]
    Rgb = 0,
    /// Hue in degrees, saturation and lightness in `[0, 1]`.
    Hsl = 1,
}

impl Mode {
    /// The label naming the mode as a whole.
    pub fn type_label(&self) -> &'static str {
        match self {
            Mode::Rgb => "RGB",
            Mode::Hsl => "HSL",
        }
    }

    /// Labels for each of the three channels.
    pub fn labels(&self) -> [&'static str; 3] {
        match self {
            Mode::Rgb => ["Red", "Green", "Blue"],
            Mode::Hsl => ["Hue", "Saturation", "Lightness"],
        }
    }

    /// The codec for each of the three channels.
    pub fn data_types(&self) -> [DataType; 3] {
        match self {
            Mode::Rgb => [DataType::HEX, DataType::HEX, DataType::HEX],
            Mode::Hsl => [DataType::DEGREE, DataType::PERCENT, DataType::PERCENT],
        }
    }

    /// The label of a single channel.
    pub fn label(&self, channel: Channel) -> &'static str {
        self.labels()[channel.index()]
    }

    /// The codec of a single channel.
    pub fn data_type(&self, channel: Channel) -> DataType {
        self.data_types()[channel.index()]
    }

    /// The other mode.
    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Rgb => Mode::Hsl,
            Mode::Hsl => Mode::Rgb,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Rgb),
            1 => Ok(Mode::Hsl),
            _ => Err(Error::UnknownMode(value)),
        }
    }
}

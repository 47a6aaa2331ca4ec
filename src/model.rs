//! A [`ColorModel`] holds the three components of a color in one of the
//! supported [`Mode`]s and converts them to and from the packed [`Argb`] form
//! and per-channel display values.

use crate::{
    color::{Argb, Channel, Components},
    hsl::Hsl,
    mode::Mode,
    rgb::Rgb,
};

/// Three components interpreted according to a [`Mode`].
///
/// ```rust
/// use colorsliders::{Argb, Channel, ColorModel, Mode};
/// let mut model = ColorModel::with_color(Mode::Rgb, Argb(0xFFFF_0000));
/// model.set_mode(Mode::Hsl);
/// assert_eq!(model.channel_display(Channel::Second), 100);
/// assert_eq!(model.color(), Argb(0xFFFF_0000));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorModel {
    components: Components,
    mode: Mode,
}

impl ColorModel {
    /// Create a model in RGB mode holding black.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model in the given mode holding the given color.
    pub fn with_color(mode: Mode, color: Argb) -> Self {
        let mut model = Self {
            components: Components::default(),
            mode,
        };
        model.set_color(color);
        model
    }

    /// The mode the components are interpreted in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The raw components, interpreted according to [`Self::mode`].
    pub fn components(&self) -> Components {
        self.components
    }

    /// Pack the components into an opaque color.
    pub fn color(&self) -> Argb {
        match self.mode {
            Mode::Rgb => Rgb::from(self.components).into(),
            Mode::Hsl => Hsl::from(self.components).into(),
        }
    }

    /// Replace the components with the given color. Alpha is ignored.
    pub fn set_color(&mut self, color: Argb) {
        self.components = match self.mode {
            Mode::Rgb => Rgb::from(color).into(),
            Mode::Hsl => Hsl::from(color).into(),
        };
    }

    /// Switch to another mode, keeping the color. The components are
    /// recalculated from the packed color, so the switch is lossy at 8-bit
    /// precision.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        let color = self.color();
        self.mode = mode;
        self.set_color(color);
    }

    /// The display value of a channel.
    pub fn channel_display(&self, channel: Channel) -> i32 {
        self.mode
            .data_type(channel)
            .to_display(self.components[channel])
    }

    /// The display values of all channels.
    pub fn display(&self) -> [i32; 3] {
        Channel::ALL.map(|channel| self.channel_display(channel))
    }

    /// Set a channel from a display value. Out of range values are clamped.
    pub fn set_channel_from_display(&mut self, channel: Channel, value: i32) {
        self.components[channel] = self.mode.data_type(channel).from_display(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn starts_as_black_rgb() {
        let model = ColorModel::new();
        assert_eq!(model.mode(), Mode::Rgb);
        assert_eq!(model.components(), Components(0.0, 0.0, 0.0));
        assert_eq!(model.color(), Argb::BLACK);
    }

    #[test]
    fn opaque_red_in_rgb() {
        let model = ColorModel::with_color(Mode::Rgb, Argb(0xFFFF_0000));
        assert_eq!(model.components(), Components(1.0, 0.0, 0.0));
        assert_eq!(model.display(), [255, 0, 0]);
    }

    #[test]
    fn opaque_black_in_hsl() {
        let model = ColorModel::with_color(Mode::Hsl, Argb(0xFF00_0000));
        assert_eq!(model.components(), Components(0.0, 0.0, 0.0));
        assert_eq!(model.display(), [0, 0, 0]);
    }

    #[test]
    fn alpha_is_ignored() {
        let model = ColorModel::with_color(Mode::Rgb, Argb(0x0012_3456));
        assert_eq!(model.color(), Argb(0xFF12_3456));
    }

    #[test]
    fn mode_switch_keeps_color() {
        let mut model = ColorModel::with_color(Mode::Rgb, Argb::opaque(255, 0, 0));

        model.set_mode(Mode::Hsl);
        assert_eq!(model.mode(), Mode::Hsl);
        assert_eq!(model.display(), [0, 100, 50]);
        assert_component_eq!(model.components().2, 0.5);

        model.set_mode(Mode::Rgb);
        assert_eq!(model.display(), [255, 0, 0]);
        assert_eq!(model.color(), Argb(0xFFFF_0000));
    }

    #[test]
    fn setting_the_same_mode_keeps_components() {
        let mut model = ColorModel::new();
        model.set_channel_from_display(Channel::First, 10);
        let before = model.components();
        model.set_mode(Mode::Rgb);
        assert_eq!(model.components(), before);
    }

    #[test]
    fn set_channels_from_display_values() {
        let mut model = ColorModel::new();
        model.set_channel_from_display(Channel::First, 255);
        model.set_channel_from_display(Channel::Second, 128);
        model.set_channel_from_display(Channel::Third, 1000);
        assert_eq!(model.display(), [255, 128, 255]);
        assert_eq!(model.color(), Argb::opaque(255, 128, 255));

        let mut model = ColorModel::with_color(Mode::Hsl, Argb::BLACK);
        model.set_channel_from_display(Channel::First, 120);
        model.set_channel_from_display(Channel::Second, 100);
        model.set_channel_from_display(Channel::Third, 50);
        assert_eq!(model.components().0, 120.0);
        assert_eq!(model.color(), Argb::opaque(0, 255, 0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_round_trip_is_exact(packed in any::<u32>()) {
                let model = ColorModel::with_color(Mode::Rgb, Argb(packed));
                prop_assert_eq!(model.color(), Argb(packed | 0xFF00_0000));
            }

            #[test]
            fn mode_switches_stay_within_one_step(packed in any::<u32>()) {
                let source = Argb(packed);
                let mut model = ColorModel::with_color(Mode::Rgb, source);
                model.set_mode(Mode::Hsl);
                model.set_mode(Mode::Rgb);
                let back = model.color();
                prop_assert!((back.red() as i32 - source.red() as i32).abs() <= 1);
                prop_assert!((back.green() as i32 - source.green() as i32).abs() <= 1);
                prop_assert!((back.blue() as i32 - source.blue() as i32).abs() <= 1);
            }

            #[test]
            fn display_values_are_in_range(packed in any::<u32>(), hsl in any::<bool>()) {
                let mode = if hsl { Mode::Hsl } else { Mode::Rgb };
                let model = ColorModel::with_color(mode, Argb(packed));
                for channel in Channel::ALL {
                    let value = model.channel_display(channel);
                    prop_assert!((0..=mode.data_type(channel).max).contains(&value));
                }
            }
        }
    }
}

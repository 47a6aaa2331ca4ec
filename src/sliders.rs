//! Headless state for a three-slider color picker. Every channel has a slider
//! and a text field showing the same display value. [`ColorSliders`] keeps
//! both in sync with a [`ColorModel`] and reports what a UI has to redraw.

use bitflags::bitflags;

use crate::{
    color::{Argb, Channel},
    mode::Mode,
    model::ColorModel,
};

bitflags! {
    /// Parts of a color picker UI that changed and should be refreshed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Changes : u8 {
        /// The mode label and channel labels changed.
        const LABELS = 1 << 0;
        /// The maximum of the sliders changed.
        const RANGES = 1 << 1;
        /// One or more slider positions changed.
        const SLIDERS = 1 << 2;
        /// One or more text fields changed.
        const TEXTS = 1 << 3;
    }
}

/// Everything a UI needs to draw one channel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelState<'a> {
    /// The label of the channel in the current mode.
    pub label: &'static str,
    /// The largest value the slider can take.
    pub max: i32,
    /// Unit shown after the value.
    pub suffix: &'static str,
    /// The slider position.
    pub progress: i32,
    /// The text field contents.
    pub text: &'a str,
}

/// Slider and text field state backed by a [`ColorModel`].
#[derive(Clone, Debug)]
pub struct ColorSliders {
    model: ColorModel,
    progress: [i32; 3],
    texts: [String; 3],
}

impl Default for ColorSliders {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSliders {
    /// Create sliders in RGB mode showing black.
    pub fn new() -> Self {
        let mut sliders = Self {
            model: ColorModel::new(),
            progress: [0; 3],
            texts: Default::default(),
        };
        sliders.refresh();
        sliders
    }

    /// The model backing the sliders.
    pub fn model(&self) -> &ColorModel {
        &self.model
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.model.mode()
    }

    /// The current color, always opaque.
    pub fn color(&self) -> Argb {
        self.model.color()
    }

    /// Show a new color in the current mode.
    pub fn set_color(&mut self, color: Argb) -> Changes {
        self.model.set_color(color);
        self.refresh()
    }

    /// Switch to another mode, keeping the color.
    pub fn set_mode(&mut self, mode: Mode) -> Changes {
        if self.model.mode() == mode {
            return Changes::empty();
        }
        self.model.set_mode(mode);
        self.refresh() | Changes::LABELS | Changes::RANGES
    }

    /// Switch between RGB and HSL.
    pub fn toggle_mode(&mut self) -> Changes {
        self.set_mode(self.model.mode().toggled())
    }

    /// Handle a slider being moved. Only moves made by the user change the
    /// color, programmatic updates are echoes of our own state.
    pub fn on_progress_changed(
        &mut self,
        channel: Channel,
        progress: i32,
        from_user: bool,
    ) -> Changes {
        if !from_user {
            return Changes::empty();
        }

        let progress = progress.clamp(0, self.model.mode().data_type(channel).max);
        self.model.set_channel_from_display(channel, progress);
        self.progress[channel.index()] = progress;
        self.texts[channel.index()] = progress.to_string();
        Changes::TEXTS
    }

    /// Handle the text field of a channel being edited. Text that is not a
    /// number counts as 0.
    pub fn on_text_changed(&mut self, channel: Channel, text: &str) -> Changes {
        let value = text.trim().parse::<i32>().unwrap_or(0);
        let max = self.model.mode().data_type(channel).max;

        self.model.set_channel_from_display(channel, value);
        self.progress[channel.index()] = value.clamp(0, max);
        self.texts[channel.index()] = text.to_owned();
        Changes::SLIDERS
    }

    /// The state of a single channel.
    pub fn channel(&self, channel: Channel) -> ChannelState<'_> {
        let mode = self.model.mode();
        let data_type = mode.data_type(channel);
        ChannelState {
            label: mode.label(channel),
            max: data_type.max,
            suffix: data_type.suffix,
            progress: self.progress[channel.index()],
            text: &self.texts[channel.index()],
        }
    }

    fn refresh(&mut self) -> Changes {
        let display = self.model.display();
        self.progress = display;
        self.texts = display.map(|value| value.to_string());
        Changes::SLIDERS | Changes::TEXTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_black_in_rgb() {
        let sliders = ColorSliders::new();
        assert_eq!(sliders.mode(), Mode::Rgb);
        assert_eq!(sliders.color(), Argb::BLACK);

        let state = sliders.channel(Channel::First);
        assert_eq!(state.label, "Red");
        assert_eq!(state.max, 255);
        assert_eq!(state.progress, 0);
        assert_eq!(state.text, "0");
    }

    #[test]
    fn set_color_updates_sliders_and_texts() {
        let mut sliders = ColorSliders::new();
        let changes = sliders.set_color(Argb::opaque(12, 34, 56));
        assert_eq!(changes, Changes::SLIDERS | Changes::TEXTS);
        assert_eq!(sliders.channel(Channel::Second).progress, 34);
        assert_eq!(sliders.channel(Channel::Third).text, "56");
    }

    #[test]
    fn toggle_mode_relabels_and_keeps_color() {
        let mut sliders = ColorSliders::new();
        sliders.set_color(Argb::opaque(255, 0, 0));

        assert_eq!(sliders.toggle_mode(), Changes::all());
        assert_eq!(sliders.mode(), Mode::Hsl);

        let hue = sliders.channel(Channel::First);
        assert_eq!(hue.label, "Hue");
        assert_eq!(hue.max, 359);
        assert_eq!(hue.suffix, "°");
        assert_eq!(hue.progress, 0);
        assert_eq!(sliders.channel(Channel::Second).text, "100");
        assert_eq!(sliders.channel(Channel::Third).progress, 50);

        sliders.toggle_mode();
        assert_eq!(sliders.color(), Argb::opaque(255, 0, 0));
    }

    #[test]
    fn setting_current_mode_changes_nothing() {
        let mut sliders = ColorSliders::new();
        assert_eq!(sliders.set_mode(Mode::Rgb), Changes::empty());
    }

    #[test]
    fn user_slider_moves_update_color_and_text() {
        let mut sliders = ColorSliders::new();

        assert_eq!(
            sliders.on_progress_changed(Channel::Second, 200, false),
            Changes::empty()
        );
        assert_eq!(sliders.color(), Argb::BLACK);

        assert_eq!(
            sliders.on_progress_changed(Channel::Second, 200, true),
            Changes::TEXTS
        );
        assert_eq!(sliders.color(), Argb::opaque(0, 200, 0));
        assert_eq!(sliders.channel(Channel::Second).text, "200");
    }

    #[test]
    fn slider_moves_are_limited_to_the_channel_range() {
        let mut sliders = ColorSliders::new();

        sliders.on_progress_changed(Channel::First, 300, true);
        let red = sliders.channel(Channel::First);
        assert_eq!(red.progress, 255);
        assert_eq!(red.text, "255");
        assert_eq!(sliders.color(), Argb::opaque(255, 0, 0));

        sliders.on_progress_changed(Channel::First, -4, true);
        assert_eq!(sliders.channel(Channel::First).progress, 0);
        assert_eq!(sliders.channel(Channel::First).text, "0");
        assert_eq!(sliders.color(), Argb::BLACK);
    }

    #[test]
    fn text_edits_update_color_and_slider() {
        let mut sliders = ColorSliders::new();

        assert_eq!(
            sliders.on_text_changed(Channel::Third, "128"),
            Changes::SLIDERS
        );
        assert_eq!(sliders.color(), Argb::opaque(0, 0, 128));
        assert_eq!(sliders.channel(Channel::Third).progress, 128);

        sliders.on_text_changed(Channel::Third, "abc");
        assert_eq!(sliders.color(), Argb::BLACK);
        assert_eq!(sliders.channel(Channel::Third).progress, 0);
        assert_eq!(sliders.channel(Channel::Third).text, "abc");

        sliders.on_text_changed(Channel::First, "");
        assert_eq!(sliders.channel(Channel::First).progress, 0);

        sliders.on_text_changed(Channel::First, "999");
        assert_eq!(sliders.channel(Channel::First).progress, 255);
        assert_eq!(sliders.color(), Argb::opaque(255, 0, 0));
    }

    #[test]
    fn hsl_text_edits_use_hsl_codecs() {
        let mut sliders = ColorSliders::new();
        sliders.set_mode(Mode::Hsl);
        sliders.on_text_changed(Channel::First, "240");
        sliders.on_text_changed(Channel::Second, "100");
        sliders.on_text_changed(Channel::Third, "50");
        assert_eq!(sliders.color(), Argb::opaque(0, 0, 255));
    }
}

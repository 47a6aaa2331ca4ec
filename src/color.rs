//! The generic building blocks every model is made of: the floating point
//! [`Component`], the three [`Components`] of a color, the [`Channel`] used
//! to address one of them and the packed [`Argb`] form.

use std::ops::{Index, IndexMut};

use crate::error::Error;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return the components as an array, in channel order.
    pub fn to_array(&self) -> [Component; 3] {
        [self.0, self.1, self.2]
    }
}

impl Index<Channel> for Components {
    type Output = Component;

    fn index(&self, channel: Channel) -> &Self::Output {
        match channel {
            Channel::First => &self.0,
            Channel::Second => &self.1,
            Channel::Third => &self.2,
        }
    }
}

impl IndexMut<Channel> for Components {
    fn index_mut(&mut self, channel: Channel) -> &mut Self::Output {
        match channel {
            Channel::First => &mut self.0,
            Channel::Second => &mut self.1,
            Channel::Third => &mut self.2,
        }
    }
}

/// Addresses one of the three components of a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    /// Red in RGB, hue in HSL.
    First = 0,
    /// Green in RGB, saturation in HSL.
    Second = 1,
    /// Blue in RGB, lightness in HSL.
    Third = 2,
}

impl Channel {
    /// All channels, in order.
    pub const ALL: [Channel; 3] = [Channel::First, Channel::Second, Channel::Third];

    /// The index of the channel in [`Components`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Channel {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Channel::First),
            1 => Ok(Channel::Second),
            2 => Ok(Channel::Third),
            _ => Err(Error::ChannelOutOfRange(value)),
        }
    }
}

/// A color packed into 32 bits with 8 bits for each of alpha, red, green and
/// blue, from the most significant byte down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Pack the given channels with an opaque alpha.
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(0xFF, red, green, blue)
    }

    /// Pack the given channels.
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// The alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

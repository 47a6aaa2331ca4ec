//! colorsliders provides the state behind a slider based color picker: a
//! color held as RGB or HSL components, converted to and from packed colors
//! and the integers shown on each slider. It also has the history slicing
//! used by a back/forward history dialog.

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hsl;
mod math;
mod mode;
mod model;
mod rgb;
mod sliders;

pub mod history;


pub use color::{Argb, Channel, Component, Components};
pub use error::Error;
pub use hsl::Hsl;
pub use mode::{DataType, Mode};
pub use model::ColorModel;
pub use rgb::Rgb;
pub use sliders::{ChannelState, Changes, ColorSliders};

//! Math utility functions.

use num_traits::{cast, Float};

/// Returns true if the value is close enough to zero to be considered zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full: T = cast(360.0).unwrap_or_else(T::zero);
    let hue = hue % full;
    let hue = if hue < T::zero() { hue + full } else { hue };
    // -0.000001 % 360 + 360 rounds up to 360.
    if hue >= full {
        T::zero()
    } else {
        hue
    }
}

/// Scale a unit value to `0..=255` and round to the nearest integer.
pub fn unit_to_u8<T: Float>(value: T) -> u8 {
    let max: T = cast(255.0).unwrap_or_else(T::one);
    (value * max).round().max(T::zero()).min(max).to_u8().unwrap_or(0)
}

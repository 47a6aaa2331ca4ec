//! Errors raised when untyped values are turned into the typed handles this
//! crate works with. Color conversions themselves never fail.

use thiserror::Error;

/// Errors produced when converting raw integers into typed values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A channel index was not in `0..=2`.
    #[error("channel index {0} out of range, expected 0..=2")]
    ChannelOutOfRange(usize),

    /// A mode discriminant did not name a known mode.
    #[error("unknown color mode: {0}")]
    UnknownMode(u8),
}

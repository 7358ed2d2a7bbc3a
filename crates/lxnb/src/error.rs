use alloc::vec::Vec;

use bstr::BStr;
use thiserror::Error;

use crate::alphabet::Position;

/// Error returned when LXNB text cannot be decoded.
///
/// `unit` is the index of the unit (equivalently, of the output byte) that
/// was being decoded when the problem was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at unit {unit}")]
pub struct DecodeError {
    pub(crate) kind: DecodeErrorKind,
    /// Index of the offending unit.
    pub unit: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind, unit: usize) -> Self {
        Self { kind, unit }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }
}

/// The reason a decode failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum DecodeErrorKind {
    /// The text holds an odd number of symbols, so the last one has no
    /// partner.
    #[error("odd number of symbols ({symbols}): cannot pair the trailing symbol")]
    OddLength {
        /// Number of symbols in the input.
        symbols: usize,
    },
    /// A symbol is not part of the table for its position.
    #[error("'{symbol}' is not a valid LXNB {position} symbol")]
    InvalidSymbol {
        /// The offending symbol.
        symbol: char,
        /// Position the symbol occupied in its unit.
        position: Position,
    },
    /// Both symbols are valid but their digits do not form a byte.
    #[error("digit pair ({high}, {low}) does not fit in a byte")]
    DigitOverflow {
        /// Decoded high digit.
        high: u8,
        /// Decoded low digit.
        low: u8,
    },
    /// The stream ended in the middle of a unit or of a symbol.
    #[error("input ended inside an encoded unit")]
    Truncated,
    /// The stream carried bytes that are not UTF-8.
    #[error("invalid UTF-8 sequence {:?}", BStr::new(.bytes))]
    InvalidUtf8 {
        /// The rejected bytes.
        bytes: Vec<u8>,
    },
    /// The decoder already failed and cannot accept more input.
    #[error("decoder was used after it failed")]
    Halted,
}

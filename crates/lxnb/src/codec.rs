//! Per-byte transform between a byte and a [`Unit`] of two symbols.

use core::fmt;

use crate::{
    alphabet::{self, Position, TABLE_SIZE},
    error::DecodeErrorKind,
    state::RollingState,
};

/// Width of one digit: a byte is two base-16 digits.
const RADIX: u8 = 16;

/// The two symbols encoding exactly one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Unit {
    /// First symbol, drawn from [`alphabet::LEAD`].
    pub lead: char,
    /// Second symbol, drawn from [`alphabet::TRAIL`].
    pub trail: char,
}

impl Unit {
    /// Pair two symbols. No validation happens until the unit is decoded.
    #[must_use]
    pub const fn new(lead: char, trail: char) -> Self {
        Self { lead, trail }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.lead, self.trail)
    }
}

/// Encode one byte under `state`, returning its unit and the next state.
#[inline]
#[must_use]
pub fn encode_byte(state: RollingState, byte: u8) -> (Unit, RollingState) {
    let high = byte / RADIX;
    let low = byte % RADIX;
    let lead = alphabet::symbol(Position::Lead, (high + state.lead_offset()) % TABLE_SIZE);
    let trail = alphabet::symbol(Position::Trail, (low + state.trail_offset(high)) % TABLE_SIZE);
    (Unit { lead, trail }, state.advance(byte))
}

/// Decode one unit under `state`, returning the byte and the next state.
///
/// # Errors
///
/// - [`DecodeErrorKind::InvalidSymbol`] if a symbol is missing from the table
///   of its position. The lead symbol is checked first.
/// - [`DecodeErrorKind::DigitOverflow`] if either recovered digit is 16.
#[inline]
pub fn decode_byte(state: RollingState, unit: Unit) -> Result<(u8, RollingState), DecodeErrorKind> {
    let lead = lookup(Position::Lead, unit.lead)?;
    let trail = lookup(Position::Trail, unit.trail)?;

    let high = (lead + TABLE_SIZE - state.lead_offset()) % TABLE_SIZE;
    let low = (trail + TABLE_SIZE - state.trail_offset(high)) % TABLE_SIZE;
    if high >= RADIX || low >= RADIX {
        return Err(DecodeErrorKind::DigitOverflow { high, low });
    }

    let byte = high * RADIX + low;
    Ok((byte, state.advance(byte)))
}

#[inline]
fn lookup(position: Position, symbol: char) -> Result<u8, DecodeErrorKind> {
    alphabet::digit(position, symbol).ok_or(DecodeErrorKind::InvalidSymbol { symbol, position })
}

//! The two symbol tables.
//!
//! Every encoded unit is a *lead* symbol (an L or N look-alike) followed by a
//! *trail* symbol (an X or B look-alike). Each table holds 17 symbols: digits
//! `0..=15` carry a nibble, digit 16 only ever appears in corrupted input and
//! is rejected as an overflow when decoding.

use core::fmt;

/// Number of symbols in each table.
pub const TABLE_SIZE: u8 = 17;

/// Symbols used in the lead (first) position of a unit.
pub const LEAD: [char; TABLE_SIZE as usize] = [
    '\u{026B}', // ɫ
    '\u{0141}', // Ł
    '\u{0139}', // Ĺ
    '\u{004C}', // L
    '\u{013E}', // ľ
    '\u{0145}', // Ņ
    '\u{0235}', // ȵ
    '\u{0143}', // Ń
    '\u{019D}', // Ɲ
    '\u{013A}', // ĺ
    '\u{A7AD}', // Ɬ
    '\u{0144}', // ń
    '\u{2C61}', // ⱡ
    '\u{019E}', // ƞ
    '\u{1E3C}', // Ḽ
    '\u{1E3D}', // ḽ
    '\u{0146}', // ņ
];

/// Symbols used in the trail (second) position of a unit.
pub const TRAIL: [char; TABLE_SIZE as usize] = [
    '\u{04B3}', // ҳ
    '\u{16B8}', // ᚸ
    '\u{0302}', // combining circumflex
    '\u{0181}', // Ɓ
    '\u{0185}', // ƅ
    '\u{04FF}', // ӿ
    '\u{03C7}', // χ
    '\u{04FD}', // ӽ
    '\u{1E8D}', // ẍ
    '\u{1E8B}', // ẋ
    '\u{00DF}', // ß
    '\u{0180}', // ƀ
    '\u{00FE}', // þ
    '\u{0253}', // ɓ
    '\u{0183}', // ƃ
    '\u{0078}', // x
    '\u{00DE}', // Þ
];

/// Which half of a unit a symbol occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Position {
    /// First symbol of a unit.
    Lead,
    /// Second symbol of a unit.
    Trail,
}

impl Position {
    #[inline]
    const fn table(self) -> &'static [char; TABLE_SIZE as usize] {
        match self {
            Position::Lead => &LEAD,
            Position::Trail => &TRAIL,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Lead => f.write_str("lead"),
            Position::Trail => f.write_str("trail"),
        }
    }
}

/// Look up the symbol for `digit` in the table for `position`.
///
/// # Panics
///
/// Panics if `digit >= TABLE_SIZE`.
#[inline]
#[must_use]
pub fn symbol(position: Position, digit: u8) -> char {
    position.table()[usize::from(digit)]
}

/// Look up the digit of `symbol` in the table for `position`, or `None` if
/// the symbol is not part of that table.
#[inline]
#[must_use]
pub fn digit(position: Position, symbol: char) -> Option<u8> {
    position
        .table()
        .iter()
        .position(|&candidate| candidate == symbol)
        .and_then(|index| u8::try_from(index).ok())
}

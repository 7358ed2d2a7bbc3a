use crate::alphabet::TABLE_SIZE;

/// Offset added to the high digit, indexed by the rolling state.
const LEAD_OFFSETS: [u8; TABLE_SIZE as usize] =
    [10, 4, 1, 7, 4, 4, 13, 2, 0, 4, 15, 11, 5, 11, 9, 12, 3];

/// Offset added to the low digit, indexed by the mid-unit state
/// (`state + 10 * high`).
const TRAIL_OFFSETS: [u8; TABLE_SIZE as usize] =
    [1, 3, 0, 5, 0, 0, 11, 6, 9, 14, 12, 13, 4, 7, 15, 0, 16];

/// Weight of the high digit when deriving the mid-unit state.
const MID_UNIT_WEIGHT: u8 = 10;

/// Running accumulator threaded through every encode and decode step.
///
/// The state is the sum of all bytes processed so far, modulo
/// [`TABLE_SIZE`]. It selects the digit offsets for the next unit, which is
/// why the same byte encodes to different symbols at different points of a
/// stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RollingState(u8);

impl RollingState {
    /// State at the start of every stream.
    pub const INITIAL: Self = Self(0);

    /// The state after `byte` has been processed.
    #[inline]
    #[must_use]
    pub const fn advance(self, byte: u8) -> Self {
        Self(((self.0 as u16 + byte as u16) % TABLE_SIZE as u16) as u8)
    }

    /// Raw accumulator value, always below [`TABLE_SIZE`].
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) const fn lead_offset(self) -> u8 {
        LEAD_OFFSETS[self.0 as usize]
    }

    /// `high` may be 16 while decoding corrupted input.
    #[inline]
    pub(crate) const fn trail_offset(self, high: u8) -> u8 {
        let mid = (self.0 as u16 + MID_UNIT_WEIGHT as u16 * high as u16) % TABLE_SIZE as u16;
        TRAIL_OFFSETS[mid as usize]
    }
}

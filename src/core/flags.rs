//! Line decoration flags
//!
//! Flags configure how an emitter decorates each line before the
//! `<TAG> <message>` body. The logger core forwards them opaquely; only
//! emitter implementations interpret them.

use std::ops::{BitOr, BitOrAssign};

/// Bitwise-OR-composable decoration flags for line emitters.
///
/// # Examples
///
/// ```
/// use taglog::Flags;
///
/// let flags = Flags::DATE | Flags::TIME | Flags::SHORT_FILE;
/// assert!(flags.contains(Flags::TIME));
/// assert!(!flags.contains(Flags::UTC));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u32);

impl Flags {
    /// No decoration: lines are emitted as composed.
    pub const NONE: Flags = Flags(0);
    /// Include the date: `2009/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// Include the time: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies [`Flags::TIME`].
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full caller file path and line: `/a/b/c/d.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line: `d.rs:23`. Overrides [`Flags::LONG_FILE`].
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone for date and time.
    pub const UTC: Flags = Flags(1 << 5);
    /// Default preset: date and time.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    /// All bits of `other` are set in `self`.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// At least one bit of `other` is set in `self`.
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Flags {
        Flags(bits)
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

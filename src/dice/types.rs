//! Die type table.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A virtual die, identified by its `dN` label.
///
/// The table is fixed at compile time, so concurrent readers need no
/// synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum DieType {
    /// Two-sided die (a coin).
    #[strum(serialize = "d2")]
    D2,
    /// Four-sided die.
    #[strum(serialize = "d4")]
    D4,
    /// Six-sided die.
    #[strum(serialize = "d6")]
    D6,
    /// Eight-sided die.
    #[strum(serialize = "d8")]
    D8,
    /// Ten-sided die.
    #[strum(serialize = "d10")]
    D10,
    /// Twelve-sided die.
    #[strum(serialize = "d12")]
    D12,
    /// Twenty-sided die.
    #[strum(serialize = "d20")]
    D20,
    /// Percentile die.
    #[strum(serialize = "d100")]
    D100,
}

impl DieType {
    /// Number of faces.
    pub const fn sides(self) -> u32 {
        match self {
            Self::D2 => 2,
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    /// Decimal digits in the side count; rolls are zero-padded to this width.
    pub const fn width(self) -> usize {
        let mut sides = self.sides();
        let mut digits = 1;
        while sides >= 10 {
            sides /= 10;
            digits += 1;
        }
        digits
    }

    /// Every die in the table.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

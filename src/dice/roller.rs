//! Single and batch rolls.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;
use tracing::{debug, instrument};

use super::types::DieType;
use crate::error::RollError;
use crate::random::RandomSource;

/// Faces on the die behind `/dice`.
pub const SINGLE_DIE_SIDES: u32 = 1000;

/// Rolls per batch.
pub const BATCH_SIZE: usize = 15;

/// Roll the thousand-sided die, formatted as four zero-padded digits.
pub fn roll_single(source: &RandomSource) -> String {
    format!("{:04}", source.roll(SINGLE_DIE_SIDES))
}

/// One die result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    /// Die that was thrown.
    pub die: DieType,
    /// Face shown, in `[1, die.sides()]`.
    pub value: u32,
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.die.width())
    }
}

/// Result of a batch, displayed as space-separated padded values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRoll {
    /// Rolls in the order they were made.
    pub rolls: Vec<Roll>,
}

impl fmt::Display for BatchRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rolls = self.rolls.iter();
        if let Some(first) = rolls.next() {
            write!(f, "{first}")?;
        }
        for roll in rolls {
            write!(f, " {roll}")?;
        }
        Ok(())
    }
}

/// Resolve the candidate dice for a batch.
///
/// An absent or empty label means every die in the table.
fn candidates(label: Option<&str>) -> Result<SmallVec<[DieType; 8]>, RollError> {
    match label.filter(|l| !l.is_empty()) {
        Some(label) => DieType::from_str(label)
            .map(|die| smallvec::smallvec![die])
            .map_err(|_| RollError::UnknownDieType {
                label: label.to_string(),
            }),
        None => Ok(DieType::all().collect()),
    }
}

/// Throw [`BATCH_SIZE`] dice, each picked uniformly from the candidates.
#[instrument(skip(source))]
pub fn roll_batch(source: &RandomSource, label: Option<&str>) -> Result<BatchRoll, RollError> {
    let dice = candidates(label)?;

    let rolls: Vec<Roll> = (0..BATCH_SIZE)
        .filter_map(|_| source.choose(&dice).copied())
        .map(|die| Roll {
            die,
            value: source.roll(die.sides()),
        })
        .collect();

    debug!(candidates = dice.len(), rolls = rolls.len(), "Batch rolled");
    Ok(BatchRoll { rolls })
}

//! Random die generation
//!
//! Callers pass the random source in; production code uses `rand::rng()`.

use rand::Rng;

/// Roll one die, uniform over `1..=sides`.
///
/// `sides` must be at least 2; the dispatcher validates this before calling.
pub fn roll_die<R: Rng>(rng: &mut R, sides: u64) -> u64 {
    debug_assert!(sides >= 2, "sides validated by caller");
    rng.random_range(1..=sides)
}

/// Ordered results of rolling several identical dice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRolls {
    /// Side count shared by every die
    pub sides: u64,
    /// Individual results in roll order
    pub rolls: Vec<u64>,
}

impl DiceRolls {
    /// Roll `count` independent dice with `sides` faces each.
    pub fn roll<R: Rng>(rng: &mut R, count: u64, sides: u64) -> Self {
        let rolls = (0..count).map(|_| roll_die(&mut *rng, sides)).collect();
        Self { sides, rolls }
    }

    /// Number of dice rolled
    pub fn count(&self) -> usize {
        self.rolls.len()
    }

    /// Sum of all rolls. Widened so 100 maximal rolls cannot overflow.
    pub fn total(&self) -> u128 {
        self.rolls.iter().map(|&r| u128::from(r)).sum()
    }

    /// Rolls joined with ", " in roll order
    pub fn joined(&self) -> String {
        self.rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// Dice domain model - per-request random die instances

//! # Dice Models
//!
//! This module defines [`RandomDie`], a die configured with a side count at
//! construction time. A die is **ephemeral**: it is built per request, has no
//! identity beyond its side count, and is never persisted.
//!
//! All rolls draw from the shared process-wide `rand::thread_rng()` source.
//! There is no seeding control and no reproducibility guarantee.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of sides a die gets when the caller does not specify one
/// (or specifies zero, which the original API treated as "unspecified")
pub const DEFAULT_SIDES: u32 = 6;

/// A die with a fixed number of sides
///
/// ## Rust Learning Notes:
///
/// ### Copy Semantics
/// `RandomDie` is a single `u32`, so `#[derive(Copy)]` is free and lets
/// callers pass dice around by value without borrow bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomDie {
    /// Number of sides, fixed at construction. Always >= 1.
    pub num_sides: u32,
}

impl RandomDie {
    /// Create a die with the given side count
    ///
    /// A side count of zero means "unspecified" and falls back to
    /// [`DEFAULT_SIDES`]. Rejecting negative counts happens at the GraphQL
    /// boundary, where the signed integer arrives; by the time a `RandomDie`
    /// exists its side count is a positive `u32`.
    pub fn new(num_sides: u32) -> Self {
        Self {
            num_sides: if num_sides == 0 {
                DEFAULT_SIDES
            } else {
                num_sides
            },
        }
    }

    /// Roll the die once, returning a uniform value in `[1, num_sides]`
    pub fn roll_once(&self) -> u32 {
        rand::thread_rng().gen_range(1..=self.num_sides)
    }

    /// Roll the die `num_rolls` times, in roll order
    ///
    /// Each roll is an independent draw. A count of zero yields an empty
    /// vector.
    pub fn roll(&self, num_rolls: u32) -> Vec<u32> {
        (0..num_rolls).map(|_| self.roll_once()).collect()
    }
}

impl Default for RandomDie {
    fn default() -> Self {
        Self::new(DEFAULT_SIDES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sides_defaults_to_six() {
        assert_eq!(RandomDie::new(0).num_sides, DEFAULT_SIDES);
        assert_eq!(RandomDie::new(0), RandomDie::new(6));
        assert_eq!(RandomDie::default().num_sides, 6);
    }

    #[test]
    fn test_explicit_sides_are_kept() {
        assert_eq!(RandomDie::new(20).num_sides, 20);
        assert_eq!(RandomDie::new(1).num_sides, 1);
    }

    #[test]
    fn test_roll_once_stays_in_range() {
        let die = RandomDie::new(6);
        for _ in 0..200 {
            let value = die.roll_once();
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn test_one_sided_die_always_rolls_one() {
        let die = RandomDie::new(1);
        for _ in 0..20 {
            assert_eq!(die.roll_once(), 1);
        }
    }

    #[test]
    fn test_roll_length_and_range() {
        let die = RandomDie::new(8);
        let rolls = die.roll(50);
        assert_eq!(rolls.len(), 50);
        assert!(rolls.iter().all(|v| (1..=8).contains(v)));
    }

    #[test]
    fn test_zero_rolls_is_empty() {
        assert!(RandomDie::new(6).roll(0).is_empty());
    }
}

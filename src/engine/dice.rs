// Stateless dice resolvers - rolls, quotes, random fractions

//! # Dice Resolver Logic
//!
//! Free functions backing the stateless GraphQL queries. Everything here is
//! synchronous, CPU-bound, and draws from the shared process-wide
//! `rand::thread_rng()` source. Argument validation (rejecting negative
//! counts from the signed GraphQL integers) happens in the GraphQL layer;
//! these functions take unsigned counts and always succeed.

use rand::Rng;

use crate::models::{RandomDie, DEFAULT_SIDES};

/// The two quotes `quoteOfTheDay` chooses between, p = 0.5 each
pub const QUOTES: [&str; 2] = ["Take it easy", "Salvation lies within"];

/// Roll `num_dice` dice with `num_sides` sides each
///
/// A side count of zero means "unspecified" and defaults to six, matching
/// [`RandomDie::new`]. Results are in roll order; zero dice yields an empty
/// vector.
pub fn roll_dice(num_dice: u32, num_sides: u32) -> Vec<u32> {
    RandomDie::new(num_sides).roll(num_dice)
}

/// Fixed convenience case: three rolls of a six-sided die
pub fn roll_three_dice() -> Vec<u32> {
    RandomDie::new(DEFAULT_SIDES).roll(3)
}

/// Pick one of the two fixed quotes, independently per call
pub fn quote_of_the_day() -> &'static str {
    if rand::thread_rng().gen_bool(0.5) {
        QUOTES[0]
    } else {
        QUOTES[1]
    }
}

/// A uniform random value in `[0, 1)`
pub fn random_fraction() -> f64 {
    rand::thread_rng().gen::<f64>()
}

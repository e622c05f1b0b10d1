//! Dice, coins and random numbers. Every generator takes its RNG so
//! results can be reproduced with a seeded one.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Most dice rolled at once
pub const MAX_DICE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub rolls: Vec<u32>,
    pub total: u32,
}

pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R, count: u32, sides: u32) -> CalcResult<DiceRoll> {
    if count == 0 || count > MAX_DICE {
        return Err(CalcError::invalid_input(
            "count",
            count.to_string(),
            format!("Roll between 1 and {} dice", MAX_DICE),
        ));
    }
    if sides < 2 {
        return Err(CalcError::invalid_input(
            "sides",
            sides.to_string(),
            "A die needs at least two sides",
        ));
    }
    let rolls: Vec<u32> = (0..count).map(|_| rng.gen_range(1..=sides)).collect();
    let total = rolls.iter().sum();
    Ok(DiceRoll { rolls, total })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinSide {
    Heads,
    Tails,
}

impl fmt::Display for CoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinSide::Heads => write!(f, "Heads"),
            CoinSide::Tails => write!(f, "Tails"),
        }
    }
}

pub fn flip_coin<R: Rng + ?Sized>(rng: &mut R) -> CoinSide {
    if rng.gen_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

/// A number in `[min, max]`: a whole number when `integer` is set,
/// otherwise any real in the half-open range `[min, max)`.
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, integer: bool) -> CalcResult<f64> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(CalcError::invalid_input(
            "range",
            format!("{}..{}", min, max),
            "Minimum must not exceed maximum",
        ));
    }
    if integer {
        let lo = min.ceil() as i64;
        let hi = max.floor() as i64;
        if lo > hi {
            return Err(CalcError::invalid_input(
                "range",
                format!("{}..{}", min, max),
                "No whole number lies in this range",
            ));
        }
        return Ok(rng.gen_range(lo..=hi) as f64);
    }
    if min == max {
        return Ok(min);
    }
    if !(max - min).is_finite() {
        return Err(CalcError::invalid_input(
            "range",
            format!("{}..{}", min, max),
            "Range is too wide",
        ));
    }
    Ok(rng.gen_range(min..max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dice_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let roll = roll_dice(&mut rng, 5, 6).unwrap();
        assert_eq!(roll.rolls.len(), 5);
        assert!(roll.rolls.iter().all(|r| (1..=6).contains(r)));
        assert_eq!(roll.total, roll.rolls.iter().sum::<u32>());
    }

    #[test]
    fn test_dice_limits() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(roll_dice(&mut rng, 0, 6).is_err());
        assert!(roll_dice(&mut rng, MAX_DICE + 1, 6).is_err());
        assert!(roll_dice(&mut rng, 1, 1).is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = roll_dice(&mut StdRng::seed_from_u64(42), 10, 20).unwrap();
        let b = roll_dice(&mut StdRng::seed_from_u64(42), 10, 20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_coin_flip_sees_both_sides() {
        let mut rng = StdRng::seed_from_u64(3);
        let flips: Vec<CoinSide> = (0..64).map(|_| flip_coin(&mut rng)).collect();
        assert!(flips.contains(&CoinSide::Heads));
        assert!(flips.contains(&CoinSide::Tails));
    }

    #[test]
    fn test_random_number() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let n = random_number(&mut rng, 1.0, 10.0, true).unwrap();
            assert!((1.0..=10.0).contains(&n));
            assert_eq!(n.fract(), 0.0);

            let x = random_number(&mut rng, -1.0, 1.0, false).unwrap();
            assert!((-1.0..1.0).contains(&x));
        }
        assert_eq!(random_number(&mut rng, 2.0, 2.0, false).unwrap(), 2.0);
        assert!(random_number(&mut rng, 5.0, 1.0, false).is_err());
        assert!(random_number(&mut rng, 1.2, 1.8, true).is_err());
    }

    #[test]
    fn test_random_number_wide_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let err = random_number(&mut rng, -1e308, 1e308, false).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let n = random_number(&mut rng, -1e308, 1e308, true).unwrap();
        assert_eq!(n.fract(), 0.0);
    }
}

//! Source of the uniform draw behind random events.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(test)]
use std::collections::VecDeque;

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Plays back fixed draws, then repeats `fallback`.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    rolls: VecDeque<f64>,
    fallback: f64,
    pub drawn: usize,
}

#[cfg(test)]
impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            fallback,
            drawn: 0,
        }
    }

    pub fn always(value: f64) -> Self {
        Self::new([], value)
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRolls {
    fn next_unit(&mut self) -> f64 {
        self.drawn += 1;
        self.rolls.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_draws_stay_in_unit_interval() {
        let mut source = RngSource::seeded(7);
        for _ in 0..1000 {
            let draw = source.next_unit();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn test_scripted_rolls_fall_back() {
        let mut rolls = ScriptedRolls::new([0.1, 0.2], 0.9);
        assert_eq!(rolls.next_unit(), 0.1);
        assert_eq!(rolls.next_unit(), 0.2);
        assert_eq!(rolls.next_unit(), 0.9);
        assert_eq!(rolls.drawn, 3);
    }
}

// src/core/session/sampling.rs
use rand::Rng;
use rand::seq::SliceRandom as _;

/// How round targets are drawn from the eligible files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Every round gets a different file.
    Distinct,
    /// Files may repeat; used when there are fewer files than rounds.
    WithReplacement,
}

impl Sampling {
    #[must_use]
    pub const fn for_pool(pool_size: usize, rounds: usize) -> Self {
        if pool_size >= rounds {
            Self::Distinct
        } else {
            Self::WithReplacement
        }
    }

    /// Draws `count` targets in random order. Returns fewer only when `pool`
    /// is empty.
    pub fn sample<R: Rng + ?Sized>(self, pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
        match self {
            Self::Distinct => {
                let mut picked: Vec<String> = pool.choose_multiple(rng, count).cloned().collect();
                picked.shuffle(rng);
                picked
            }
            Self::WithReplacement => (0..count)
                .filter_map(|_| pool.choose(rng).cloned())
                .collect(),
        }
    }
}

//! Random simple chains in a rectangular area (uniform draws + replay tokens).
//!
//! Model
//! - Exactly `n` independent uniform draws inside the area; each draw that
//!   would break the simple-chain invariant is discarded and the loop moves
//!   on (no retry). The returned chain therefore has between 0 and `n`
//!   vertices and usually fewer than `n` — callers must not assume the
//!   requested count is met.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Chain;

/// Axis-aligned sampling area; low bound inclusive, high bound exclusive on
/// each axis.
#[derive(Clone, Copy, Debug)]
pub struct Area2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Area2 {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Vector2<f64> {
        Vector2::new(
            rng.gen_range(self.min.x..self.max.x),
            rng.gen_range(self.min.y..self.max.y),
        )
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple chain with exactly `n` sampling attempts.
///
/// Vertex indices follow the attempt counter, so a rejected draw leaves a
/// gap; only the interactive append path numbers by chain length.
pub fn generate_chain(area: Area2, n: usize, tok: ReplayToken) -> Chain {
    let mut rng = tok.to_std_rng();
    let mut chain = Chain::new();
    for k in 0..n {
        let p = area.sample(&mut rng);
        let _ = chain.try_append_indexed(p, k);
    }
    chain
}

//! Deterministic pseudo-random stream for puzzle generation.
//!
//! Generation must be reproducible across runs and across implementations,
//! so the stream is pinned to SplitMix64 (Sebastiano Vigna, 2015) rather than
//! any library default:
//!
//! ```text
//! state  = state + 0x9E3779B97F4A7C15            (wrapping)
//! z      = (state ^ (state >> 30)) * 0xBF58476D1CE4E5B9
//! z      = (z ^ (z >> 27)) * 0x94D049BB133111EB
//! output = z ^ (z >> 31)
//! ```
//!
//! Bounded draws use the 128-bit multiply-high reduction
//! `below(n) = (next_u64() as u128 * n as u128) >> 64`, and shuffles are
//! Fisher-Yates from the last index down to 1 with `j = below(i + 1)`.

use tracing::instrument;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a stream from `seed`. Every seed, including 0, is valid.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform-ish value in `[0, bound)`; returns 0 when `bound` is 0.
    pub fn below(&mut self, bound: u64) -> u64 {
        ((u128::from(self.next_u64()) * u128::from(bound)) >> 64) as u64
    }

    /// Shuffles `slice` in place (Fisher-Yates, high index first).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.below(i as u64 + 1) as usize;
            slice.swap(i, j);
        }
    }
}

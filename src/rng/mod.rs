//! Deterministic uniform random streams
//!
//! The colony consumes randomness only through [`RandomStream`], one unit
//! draw at a time. [`LcgStream`] is the default generator; any `rand` RNG can
//! be plugged in through [`RngStream`].

use rand::{Error, Rng, RngCore, SeedableRng};

const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

/// 2^24: unit draws carry 24 bits of resolution
const UNIT_SCALE: f64 = 16777216.0;

/// Source of uniform draws in [0, 1)
pub trait RandomStream {
    /// Next draw in [0, 1)
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomStream + ?Sized> RandomStream for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// 64-bit linear congruential generator with an xorshift output stage
///
/// The seed is used as the initial state unchanged, so a given seed always
/// reproduces the same sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcgStream {
    state: u64,
}

impl LcgStream {
    /// Create a stream whose state is the seed itself
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Current internal state
    pub fn state(&self) -> u64 {
        self.state
    }

    fn step(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        ((self.state >> 18) ^ self.state) as u32
    }
}

impl RandomStream for LcgStream {
    fn next_unit(&mut self) -> f64 {
        (self.step() & 0x00FF_FFFF) as f64 / UNIT_SCALE
    }
}

impl RngCore for LcgStream {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.step());
        let hi = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for LcgStream {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Adapter feeding any `rand` generator into the colony
#[derive(Clone, Debug)]
pub struct RngStream<R> {
    rng: R,
}

impl<R: RngCore> RngStream<R> {
    /// Wrap a generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomStream for RngStream<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

fn splitmix64(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Independent stream for one ant of one iteration
///
/// Depends only on its three inputs, so parallel runs are reproducible no
/// matter how ants are scheduled across threads.
pub fn substream(seed: u64, iteration: u64, ant: u64) -> LcgStream {
    let key = splitmix64(splitmix64(splitmix64(seed) ^ iteration) ^ ant);
    LcgStream::new(key)
}

//! Random RUT generation.
//!
//! Every generated RUT gets its check digit from [`calc_check_digit`], so it
//! always passes [`Rut::is_valid`].
//!
//! [`calc_check_digit`]: crate::calc_check_digit

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, RutError};
use crate::rut::{MAX_NUMBER, Rut};

/// Lower bound (inclusive) of the default range of issued numbers.
pub const DEFAULT_MIN: u32 = 4_000_000;

/// Upper bound (exclusive) of the default range.
pub const DEFAULT_MAX: u32 = 80_000_000;

/// Options for random generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomOptions {
    /// Smallest numeric body that may be drawn (inclusive).
    pub min: u32,
    /// Numeric bodies are drawn strictly below this value.
    pub max: u32,
    /// Seed for a reproducible stream. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: None,
        }
    }
}

impl RandomOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, min: u32, max: u32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that `[min, max)` is non-empty and only holds 1-8 digit bodies.
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 || self.min >= self.max || self.max > MAX_NUMBER + 1 {
            return Err(RutError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Number of distinct bodies in `[min, max)`.
    pub fn width(&self) -> u64 {
        u64::from(self.max.saturating_sub(self.min))
    }
}

/// Stateful source of valid random RUTs.
///
/// A seeded generator yields the same sequence every time it is rebuilt with
/// the same options.
///
/// ```
/// use chilean_rut::{RandomOptions, RutGenerator};
///
/// let options = RandomOptions::new().with_seed(7);
/// let a: Vec<_> = RutGenerator::new(&options).unwrap().take(3).collect();
/// let b: Vec<_> = RutGenerator::new(&options).unwrap().take(3).collect();
/// assert_eq!(a, b);
/// assert!(a.iter().all(|rut| rut.is_valid()));
/// ```
#[derive(Debug, Clone)]
pub struct RutGenerator {
    rng: StdRng,
    min: u32,
    max: u32,
}

impl RutGenerator {
    pub fn new(options: &RandomOptions) -> Result<Self> {
        options.validate()?;
        let rng = match options.seed {
            Some(seed) => {
                debug!(seed, min = options.min, max = options.max, "seeded RUT generator");
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!(min = options.min, max = options.max, "unseeded RUT generator");
                StdRng::from_os_rng()
            }
        };
        Ok(Self {
            rng,
            min: options.min,
            max: options.max,
        })
    }

    pub fn next_rut(&mut self) -> Rut {
        let number = self.rng.random_range(self.min..self.max);
        Rut::from_number_in_range(number)
    }

    /// Draw `n` RUTs; duplicates are possible.
    pub fn draw(&mut self, n: usize) -> Vec<Rut> {
        (0..n).map(|_| self.next_rut()).collect()
    }

    /// Draw `n` pairwise distinct RUTs, resampling on collision.
    ///
    /// Fails with [`RutError::RangeExhausted`] when the range holds fewer than
    /// `n` bodies. As `n` approaches the range width the expected number of
    /// resamples grows quickly; keeping `n` well below it is up to the caller.
    pub fn draw_unique(&mut self, n: usize) -> Result<BTreeSet<Rut>> {
        let available = u64::from(self.max - self.min);
        if n as u64 > available {
            return Err(RutError::RangeExhausted {
                requested: n,
                available,
            });
        }
        let mut set = BTreeSet::new();
        let mut resamples = 0usize;
        while set.len() < n {
            let rut = self.next_rut();
            if !set.insert(rut) {
                resamples += 1;
                trace!(number = rut.number(), "resampling duplicate RUT");
            }
        }
        debug!(count = n, resamples, "drew unique RUTs");
        Ok(set)
    }
}

impl Iterator for RutGenerator {
    type Item = Rut;

    fn next(&mut self) -> Option<Rut> {
        Some(self.next_rut())
    }
}

/// Draw one valid RUT.
pub fn random(options: &RandomOptions) -> Result<Rut> {
    Ok(RutGenerator::new(options)?.next_rut())
}

/// Draw `n` valid RUTs from a single generator; duplicates are possible.
pub fn randoms(n: usize, options: &RandomOptions) -> Result<Vec<Rut>> {
    Ok(RutGenerator::new(options)?.draw(n))
}

/// Draw `n` pairwise distinct valid RUTs.
///
/// See [`RutGenerator::draw_unique`] for the failure and cost model.
pub fn uniques(n: usize, options: &RandomOptions) -> Result<BTreeSet<Rut>> {
    RutGenerator::new(options)?.draw_unique(n)
}

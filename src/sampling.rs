// src/sampling.rs
//! Seeded generation of random, valid option parameter sets
//!
//! Used to drive batch benchmarks and property checks over a realistic
//! region of the input space. Same seed → same sequence.

use crate::analytics::bs_analytic::OptionParameters;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// Ranges the sampler draws from; every bound keeps the inputs valid
#[derive(Debug, Clone, Copy)]
pub struct SamplingRanges {
    pub spot: (f64, f64),
    pub moneyness: (f64, f64), // K / S
    pub expiry: (f64, f64),
    pub rate: (f64, f64),
    pub sigma: (f64, f64),
}

impl Default for SamplingRanges {
    fn default() -> Self {
        SamplingRanges {
            spot: (10.0, 500.0),
            moneyness: (0.5, 1.5),
            expiry: (0.02, 5.0),
            rate: (0.0, 0.10),
            sigma: (0.05, 0.80),
        }
    }
}

pub struct ParameterSampler {
    rng: StdRng,
    spot: Uniform<f64>,
    moneyness: Uniform<f64>,
    expiry: Uniform<f64>,
    rate: Uniform<f64>,
    sigma: Uniform<f64>,
}

impl ParameterSampler {
    pub fn new(seed: u64) -> Self {
        Self::with_ranges(seed, SamplingRanges::default())
    }

    pub fn with_ranges(seed: u64, ranges: SamplingRanges) -> Self {
        ParameterSampler {
            rng: StdRng::seed_from_u64(seed),
            spot: Uniform::new_inclusive(ranges.spot.0, ranges.spot.1),
            moneyness: Uniform::new_inclusive(ranges.moneyness.0, ranges.moneyness.1),
            expiry: Uniform::new_inclusive(ranges.expiry.0, ranges.expiry.1),
            rate: Uniform::new_inclusive(ranges.rate.0, ranges.rate.1),
            sigma: Uniform::new_inclusive(ranges.sigma.0, ranges.sigma.1),
        }
    }

    pub fn sample(&mut self) -> OptionParameters {
        let spot = self.spot.sample(&mut self.rng);
        OptionParameters {
            spot,
            strike: spot * self.moneyness.sample(&mut self.rng),
            expiry: self.expiry.sample(&mut self.rng),
            rate: self.rate.sample(&mut self.rng),
            sigma: self.sigma.sample(&mut self.rng),
        }
    }

    pub fn sample_n(&mut self, n: usize) -> Vec<OptionParameters> {
        (0..n).map(|_| self.sample()).collect()
    }
}

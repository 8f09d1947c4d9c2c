//! Seeded random conversion sweeps
//!
//! Draws random quantities and unit pairs from a pool and checks that:
//! - compatible pairs round-trip (A → B → A) within tolerance
//! - incompatible pairs never yield a value

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use dimensa_core::{convert, Unit};

use crate::HarnessConfig;

/// Sweep configuration
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Number of random conversions
    pub samples: usize,
    /// Quantities are drawn from `-magnitude..magnitude`; a sweep with a
    /// non-positive or non-finite magnitude draws nothing
    pub magnitude: f64,
    /// RNG seed
    pub seed: u64,
    /// Tolerance for round trips
    pub harness: HarnessConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            samples: 1000,
            magnitude: 1.0e6,
            seed: 0x5eed,
            harness: HarnessConfig {
                relative_tolerance: 1e-9,
                absolute_tolerance: 1e-6,
            },
        }
    }
}

/// Sweep statistics
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepResult {
    /// Compatible pairs that round-tripped
    pub round_trips: usize,
    /// Incompatible pairs correctly rejected
    pub rejections: usize,
    /// Round trips outside tolerance
    pub drift_failures: usize,
    /// Incompatible pairs that produced a value
    pub false_compatibles: usize,
}

impl SweepResult {
    pub fn is_clean(&self) -> bool {
        self.drift_failures == 0 && self.false_compatibles == 0
    }
}

/// Run a sweep over `pool`
pub fn run_sweep(pool: &[Unit], config: &SweepConfig) -> SweepResult {
    let mut result = SweepResult::default();
    if pool.is_empty() {
        return result;
    }
    if !config.magnitude.is_finite() || config.magnitude <= 0.0 {
        warn!(magnitude = config.magnitude, "empty quantity range, nothing to sweep");
        return result;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    for _ in 0..config.samples {
        let a = &pool[rng.gen_range(0..pool.len())];
        let b = &pool[rng.gen_range(0..pool.len())];
        let x: f64 = rng.gen_range(-config.magnitude..config.magnitude);

        match convert(x, a, b) {
            Some(y) if a.is_compatible(b) => {
                let back = convert(y, b, a);
                if back.map_or(false, |v| config.harness.approx_eq(v, x)) {
                    result.round_trips += 1;
                } else {
                    warn!(x, ?back, "round trip drifted");
                    result.drift_failures += 1;
                }
            }
            Some(y) => {
                warn!(x, y, from = %a.dimension(), to = %b.dimension(), "incompatible pair converted");
                result.false_compatibles += 1;
            }
            None => result.rejections += 1,
        }
    }

    debug!(?result, seed = config.seed, "sweep finished");
    result
}

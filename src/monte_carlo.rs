/// Monte Carlo round-trip trials
/// Generates data with a known surplus or deficit and checks the allocator agrees

use rand::Rng;
use tracing::warn;

use crate::error::Result;
use crate::generator::{generate_data, GeneratorParams};
use crate::satisfier::satisfy_order_raw;

/// Outcome of a batch of round-trip trials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialStats {
    pub runs: usize,
    pub agreements: usize,
    /// `extra_stock` value of every run where the allocator disagreed with the generator
    pub disagreements: Vec<i64>,
}

impl TrialStats {
    pub fn agreement_rate(&self) -> f64 {
        if self.runs == 0 {
            return 1.0;
        }
        self.agreements as f64 / self.runs as f64
    }
}

/// Run `trials_per_value` round trips for each surplus in `extra_stock_values`
pub fn run_round_trip_trials<R: Rng>(
    params: &GeneratorParams,
    extra_stock_values: &[i64],
    trials_per_value: usize,
    rng: &mut R,
) -> Result<TrialStats> {
    let mut stats = TrialStats::default();

    for &extra_stock in extra_stock_values {
        let trial_params = GeneratorParams { extra_stock, ..params.clone() };
        for _ in 0..trials_per_value {
            let data = generate_data(&trial_params, rng)?;
            let satisfied = satisfy_order_raw(data.stock, data.orders)?;

            stats.runs += 1;
            if satisfied == data.possible {
                stats.agreements += 1;
            } else {
                warn!(extra_stock, expected = data.possible, satisfied, "round trip disagreed");
                stats.disagreements.push(extra_stock);
            }
        }
    }

    Ok(stats)
}

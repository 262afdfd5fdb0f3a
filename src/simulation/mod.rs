// src/simulation/mod.rs

//! Measurement of single-qubit states.
//!
//! The free functions in `engine` are the pure core. [`Simulator`] is the
//! context object the surrounding application holds on to: it owns the random
//! number generator and the validation mode, so nothing in the crate relies on
//! ambient global state.

mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use engine::{collapse, measure, probability_of_one};
pub use results::MeasurementCounts;

use crate::bloch::{BlochVector, bloch_coordinates};
use crate::circuits::Circuit;
use crate::core::{Measurement, QnodeResult, QubitState};
use crate::validation::ValidationMode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Construction options for a [`Simulator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Fixed RNG seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Normalization checks applied before reading a state.
    pub validation: ValidationMode,
}

/// Owns the randomness source and validation policy used to read states.
pub struct Simulator {
    rng: StdRng,
    config: SimulatorConfig,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    /// Creates a simulator seeded from entropy, with validation off.
    pub fn new() -> Self {
        Self::with_config(SimulatorConfig::default())
    }

    /// Creates a simulator whose measurement sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(SimulatorConfig { seed: Some(seed), ..SimulatorConfig::default() })
    }

    /// Creates a simulator from explicit configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, fixed = config.seed.is_some(), validation = ?config.validation, "simulator created");
        Self { rng: StdRng::seed_from_u64(seed), config }
    }

    /// The configuration this simulator was built with.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Applies every gate of `circuit` to `state`, in order.
    pub fn run(&self, circuit: &Circuit, state: &QubitState) -> QnodeResult<QubitState> {
        self.validate(state)?;
        Ok(circuit.apply(state))
    }

    /// Probability of observing `|1⟩`.
    pub fn probability_of_one(&self, state: &QubitState) -> QnodeResult<f64> {
        self.validate(state)?;
        Ok(probability_of_one(state))
    }

    /// Bloch-sphere coordinates of `state`.
    pub fn bloch(&self, state: &QubitState) -> QnodeResult<BlochVector> {
        self.validate(state)?;
        Ok(bloch_coordinates(state))
    }

    /// Measures `state` once, drawing from the simulator's generator.
    pub fn measure(&mut self, state: &QubitState) -> QnodeResult<Measurement> {
        self.validate(state)?;
        Ok(measure(state, &mut self.rng))
    }

    /// Measures fresh copies of `state` `shots` times and tallies the outcomes.
    pub fn sample(&mut self, state: &QubitState, shots: usize) -> QnodeResult<MeasurementCounts> {
        self.validate(state)?;
        let mut counts = MeasurementCounts::default();
        for _ in 0..shots {
            counts.record(measure(state, &mut self.rng).outcome);
        }
        tracing::debug!(shots, ones = counts.ones, "sampled state");
        Ok(counts)
    }

    fn validate(&self, state: &QubitState) -> QnodeResult<()> {
        self.config.validation.check(state).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected state");
        })
    }
}

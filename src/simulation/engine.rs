// src/simulation/engine.rs

//! Born-rule probability and measurement of a single qubit.
//!
//! `measure` is the only place randomness enters the engine. The random draw
//! comes from a caller-supplied generator, and the decision itself lives in the
//! pure [`collapse`] so tests can pin the sample exactly.

use crate::core::complex::magnitude;
use crate::core::{Measurement, Outcome, QubitState};
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

/// Probability of observing the "one" outcome: `|beta|²`.
///
/// The result is not clamped. For a normalized state it lies in `[0, 1]`;
/// a non-normalized input is the caller's problem.
pub fn probability_of_one(state: &QubitState) -> f64 {
    let m = magnitude(state.beta());
    m * m
}

/// Resolves a measurement given a uniform sample `u` in `[0, 1)`.
///
/// Outcome is one when `u < probability_of_one(state)`, zero otherwise. The
/// returned state is exactly the canonical state for the outcome.
pub fn collapse(state: &QubitState, u: f64) -> Measurement {
    let outcome = if u < probability_of_one(state) { Outcome::One } else { Outcome::Zero };
    Measurement::from_outcome(outcome)
}

/// Measures `state`, drawing a single uniform sample from `rng`.
pub fn measure<R: Rng + ?Sized>(state: &QubitState, rng: &mut R) -> Measurement {
    let u: f64 = StandardUniform.sample(rng);
    let measurement = collapse(state, u);
    tracing::trace!(sample = u, outcome = measurement.outcome.bit(), "measured qubit");
    measurement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::make;
    use crate::operations::{Gate, apply_gate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_probability_of_canonical_states() {
        assert_eq!(probability_of_one(&QubitState::ZERO), 0.0);
        assert_eq!(probability_of_one(&QubitState::ONE), 1.0);
    }

    #[test]
    fn test_probability_after_hadamard() {
        let plus = apply_gate(&QubitState::ZERO, Gate::Hadamard);
        assert!((probability_of_one(&plus) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_probability_is_unclamped_for_unnormalized_input() {
        let state = QubitState::new(make(1.0, 0.0), make(2.0, 0.0));
        assert!((probability_of_one(&state) - 4.0).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_collapse_threshold() {
        let state = QubitState::new(make(0.6, 0.0), make(0.8, 0.0)); // P(1) = 0.64
        assert_eq!(collapse(&state, 0.0).outcome, Outcome::One);
        assert_eq!(collapse(&state, 0.63).outcome, Outcome::One);
        assert_eq!(collapse(&state, 0.65).outcome, Outcome::Zero);
        assert_eq!(collapse(&state, 0.99).state, QubitState::ZERO);
        assert_eq!(collapse(&state, 0.1).state, QubitState::ONE);
    }

    #[test]
    fn test_collapse_of_zero_state_is_always_zero() {
        // u is never below 0, so P(1) = 0 can never fire.
        for u in [0.0, 0.25, 0.5, 0.999_999] {
            let m = collapse(&QubitState::ZERO, u);
            assert_eq!(m.outcome, Outcome::Zero);
            assert_eq!(m.state, QubitState::ZERO);
        }
    }

    #[test]
    fn test_measure_canonical_states_with_seeded_rng() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let zero = measure(&QubitState::ZERO, &mut rng);
            assert_eq!(zero.outcome, Outcome::Zero);
            assert_eq!(zero.state, QubitState::ZERO);

            let one = measure(&QubitState::ONE, &mut rng);
            assert_eq!(one.outcome, Outcome::One);
            assert_eq!(one.state, QubitState::ONE);
        }
    }

    #[test]
    fn test_measure_is_reproducible_for_same_seed() {
        let plus = apply_gate(&QubitState::ZERO, Gate::Hadamard);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let run_a: Vec<Outcome> = (0..64).map(|_| measure(&plus, &mut a).outcome).collect();
        let run_b: Vec<Outcome> = (0..64).map(|_| measure(&plus, &mut b).outcome).collect();
        assert_eq!(run_a, run_b);
    }
}

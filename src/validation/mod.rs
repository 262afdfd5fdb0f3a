// src/validation/mod.rs

//! Opt-in checks on [`QubitState`] values.
//!
//! The engine itself never validates: every state produced by the gate
//! catalogue stays normalized. Callers that construct states from outside
//! data can run these checks, or configure a [`crate::Simulator`] with
//! [`ValidationMode::Strict`] to have them run before every read.

use crate::core::{NORM_TOLERANCE, QnodeError, QnodeResult, QubitState};
use serde::{Deserialize, Serialize};

/// Whether the simulator checks normalization before reading a state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Trust the caller. Non-normalized input gives meaningless results but no error.
    #[default]
    Off,
    /// Reject states whose `|alpha|² + |beta|²` deviates from 1 by more than `tolerance`.
    Strict {
        /// Allowed deviation from 1.
        tolerance: f64,
    },
}

impl ValidationMode {
    /// Strict validation with the default tolerance.
    pub fn strict() -> Self {
        ValidationMode::Strict { tolerance: NORM_TOLERANCE }
    }

    /// Runs the configured check against `state`.
    pub fn check(&self, state: &QubitState) -> QnodeResult<()> {
        match self {
            ValidationMode::Off => Ok(()),
            ValidationMode::Strict { tolerance } => check_normalization(state, Some(*tolerance)),
        }
    }
}

/// Checks if the state is normalized (`|alpha|² + |beta|² ≈ 1`).
///
/// # Arguments
/// * `state` - The `QubitState` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QnodeError::InvalidState)` otherwise.
/// * `Err(QnodeError::InvalidArgument)` if `tolerance` is negative, infinite or NaN.
pub fn check_normalization(state: &QubitState, tolerance: Option<f64>) -> QnodeResult<()> {
    let tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(QnodeError::invalid_argument(format!(
            "Normalization tolerance {} must be finite and non-negative",
            tolerance
        )));
    }
    let norm_sqr = state.norm_sqr();
    // A NaN norm fails the comparison and lands in the error branch.
    if (norm_sqr - 1.0).abs() <= tolerance {
        Ok(())
    } else {
        Err(QnodeError::InvalidState { norm_sqr, tolerance })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::make;
    use crate::operations::{Gate, apply_gate};

    #[test]
    fn test_canonical_and_gate_outputs_pass() -> QnodeResult<()> {
        check_normalization(&QubitState::ZERO, None)?;
        check_normalization(&QubitState::ONE, None)?;
        let mut state = QubitState::ZERO;
        for gate in [Gate::Hadamard, Gate::PiOver4Phase, Gate::PauliY, Gate::Hadamard, Gate::Phase] {
            state = apply_gate(&state, gate);
            check_normalization(&state, None)?;
        }
        Ok(())
    }

    #[test]
    fn test_unnormalized_state_rejected() {
        let state = QubitState::new(make(1.0, 0.0), make(1.0, 0.0));
        match check_normalization(&state, None) {
            Err(QnodeError::InvalidState { norm_sqr, .. }) => assert!((norm_sqr - 2.0).abs() < 1e-12),
            other => panic!("Expected InvalidState, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_tolerance() {
        let state = QubitState::new(make(1.001, 0.0), make(0.0, 0.0));
        assert!(check_normalization(&state, None).is_err());
        assert!(check_normalization(&state, Some(1e-2)).is_ok());
    }

    #[test]
    fn test_unusable_tolerance_is_invalid_argument() {
        let bad_state = QubitState::new(make(3.0, 0.0), make(4.0, 0.0));
        for tolerance in [f64::NAN, -1.0, f64::INFINITY] {
            let mode = ValidationMode::Strict { tolerance };
            for state in [QubitState::ZERO, bad_state] {
                match mode.check(&state) {
                    Err(QnodeError::InvalidArgument { message }) => {
                        assert!(message.contains("tolerance"), "Incorrect error message: {}", message);
                    }
                    other => panic!("tolerance {}: expected InvalidArgument, got {:?}", tolerance, other),
                }
            }
        }
        assert!(check_normalization(&QubitState::ZERO, Some(0.0)).is_ok());
    }

    #[test]
    fn test_nan_state_rejected() {
        let state = QubitState::new(make(f64::NAN, 0.0), make(0.0, 0.0));
        assert!(matches!(check_normalization(&state, None), Err(QnodeError::InvalidState { .. })));
    }

    #[test]
    fn test_mode_off_accepts_anything() {
        let state = QubitState::new(make(3.0, 0.0), make(4.0, 0.0));
        assert!(ValidationMode::Off.check(&state).is_ok());
        assert!(ValidationMode::strict().check(&state).is_err());
        assert_eq!(ValidationMode::default(), ValidationMode::Off);
    }
}

// src/core/state.rs

use super::complex::{Amplitude, format_complex, magnitude, make};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The state of a single qubit: `alpha|0⟩ + beta|1⟩`.
///
/// States are small `Copy` values. Every operation on them returns a new state
/// instead of mutating in place, so a node's history can be replayed freely.
///
/// The normalization invariant `|alpha|² + |beta|² = 1` is *not* checked here.
/// Every catalogue gate is unitary and preserves it; callers that build states
/// by hand can opt into [`crate::validation::check_normalization`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QubitState {
    alpha: Amplitude,
    beta: Amplitude,
}

impl QubitState {
    /// The canonical `|0⟩` state (`alpha = 1`, `beta = 0`).
    pub const ZERO: QubitState = QubitState { alpha: make(1.0, 0.0), beta: make(0.0, 0.0) };

    /// The canonical `|1⟩` state (`alpha = 0`, `beta = 1`).
    pub const ONE: QubitState = QubitState { alpha: make(0.0, 0.0), beta: make(1.0, 0.0) };

    /// Creates a state from raw amplitudes. No normalization is applied.
    pub const fn new(alpha: Amplitude, beta: Amplitude) -> Self {
        Self { alpha, beta }
    }

    /// Amplitude of the "zero" basis outcome.
    pub fn alpha(&self) -> Amplitude {
        self.alpha
    }

    /// Amplitude of the "one" basis outcome.
    pub fn beta(&self) -> Amplitude {
        self.beta
    }

    /// `|alpha|² + |beta|²`; equals 1 for every normalized state.
    pub fn norm_sqr(&self) -> f64 {
        let a = magnitude(self.alpha);
        let b = magnitude(self.beta);
        a * a + b * b
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &QubitState, tolerance: f64) -> bool {
        (self.alpha - other.alpha).norm() < tolerance && (self.beta - other.beta).norm() < tolerance
    }
}

impl Default for QubitState {
    fn default() -> Self {
        QubitState::ZERO
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})|0⟩ + ({})|1⟩", format_complex(self.alpha), format_complex(self.beta))
    }
}

/// One of the two mutually exclusive measurement results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The "zero" basis outcome.
    Zero,
    /// The "one" basis outcome.
    One,
}

impl Outcome {
    /// The outcome as a classical bit.
    pub fn bit(self) -> u8 {
        match self {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }

    /// The canonical post-measurement state for this outcome.
    pub fn collapsed_state(self) -> QubitState {
        match self {
            Outcome::Zero => QubitState::ZERO,
            Outcome::One => QubitState::ONE,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.bit()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}⟩", self.bit())
    }
}

/// The result of measuring a state: the observed outcome together with the
/// canonical state the qubit collapsed to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Observed basis outcome.
    pub outcome: Outcome,
    /// Exactly [`QubitState::ZERO`] or [`QubitState::ONE`].
    pub state: QubitState,
}

impl Measurement {
    pub(crate) fn from_outcome(outcome: Outcome) -> Self {
        Self { outcome, state: outcome.collapsed_state() }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Measured {}", self.outcome)
    }
}

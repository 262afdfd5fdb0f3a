// src/operations/mod.rs

//! The fixed catalogue of single-qubit gates and their application to a
//! [`QubitState`].
//!
//! The catalogue is closed: each [`Gate`] variant maps to one constant 2×2
//! unitary matrix. Applying a gate is a plain matrix-vector product written
//! with the primitives from [`crate::core::complex`].

use crate::core::complex::{Amplitude, add, exp_imaginary, make, multiply};
use crate::core::{QnodeError, QnodeResult, QubitState, T_PHASE};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::str::FromStr;

/// A 2×2 complex matrix, row-major.
pub type GateMatrix = [[Amplitude; 2]; 2];

/// A single-qubit gate from the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gate {
    /// Maps a basis state to an equal superposition.
    Hadamard,
    /// Bit flip: swaps the two amplitudes.
    PauliX,
    /// Swaps the amplitudes with a phase twist.
    PauliY,
    /// Phase flip: negates the second amplitude.
    PauliZ,
    /// S gate: multiplies the second amplitude by `i`.
    Phase,
    /// T gate: multiplies the second amplitude by `e^(iπ/4)`.
    PiOver4Phase,
}

impl Gate {
    /// Every gate in the catalogue, in display order.
    pub const ALL: [Gate; 6] = [
        Gate::Hadamard,
        Gate::PauliX,
        Gate::PauliY,
        Gate::PauliZ,
        Gate::Phase,
        Gate::PiOver4Phase,
    ];

    /// The short tag the UI uses for this gate (`H`, `X`, `Y`, `Z`, `S`, `T`).
    pub fn symbol(self) -> &'static str {
        match self {
            Gate::Hadamard => "H",
            Gate::PauliX => "X",
            Gate::PauliY => "Y",
            Gate::PauliZ => "Z",
            Gate::Phase => "S",
            Gate::PiOver4Phase => "T",
        }
    }

    /// The long, human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Gate::Hadamard => "Hadamard",
            Gate::PauliX => "PauliX",
            Gate::PauliY => "PauliY",
            Gate::PauliZ => "PauliZ",
            Gate::Phase => "Phase",
            Gate::PiOver4Phase => "PiOver4Phase",
        }
    }

    /// True when applying the gate twice is the identity.
    pub fn is_self_inverse(self) -> bool {
        matches!(self, Gate::Hadamard | Gate::PauliX | Gate::PauliY | Gate::PauliZ)
    }

    /// The gate's unitary matrix.
    pub fn matrix(self) -> GateMatrix {
        let zero = Amplitude::zero();
        let one = Amplitude::one();
        let i = Amplitude::i();
        match self {
            Gate::Hadamard => {
                let h = make(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            Gate::PauliX => [[zero, one], [one, zero]],
            Gate::PauliY => [[zero, -i], [i, zero]],
            Gate::PauliZ => [[one, zero], [zero, -one]],
            Gate::Phase => [[one, zero], [zero, i]],
            Gate::PiOver4Phase => [[one, zero], [zero, exp_imaginary(T_PHASE)]],
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Gate {
    type Err = QnodeError;

    /// Accepts the short tag or the long name, e.g. `"H"` or `"Hadamard"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Gate::ALL
            .into_iter()
            .find(|gate| gate.symbol() == name || gate.name() == name)
            .ok_or_else(|| QnodeError::invalid_argument(format!("Gate '{}' is not in the catalogue", name)))
    }
}

impl TryFrom<String> for Gate {
    type Error = QnodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gate> for String {
    fn from(gate: Gate) -> String {
        gate.symbol().to_string()
    }
}

/// Applies `gate` to `state` and returns the new state.
///
/// `alpha' = M00*alpha + M01*beta`, `beta' = M10*alpha + M11*beta`.
/// The input is left untouched. Since every catalogue matrix is unitary, a
/// normalized input yields a normalized output up to rounding.
pub fn apply_gate(state: &QubitState, gate: Gate) -> QubitState {
    let m = gate.matrix();
    let (alpha, beta) = (state.alpha(), state.beta());
    let new_alpha = add(multiply(m[0][0], alpha), multiply(m[0][1], beta));
    let new_beta = add(multiply(m[1][0], alpha), multiply(m[1][1], beta));
    tracing::trace!(gate = gate.symbol(), "applied gate");
    QubitState::new(new_alpha, new_beta)
}

/// Looks up `name` in the catalogue, then applies it.
///
/// # Errors
/// Returns `QnodeError::InvalidArgument` for a name outside the catalogue;
/// no arithmetic is attempted in that case.
pub fn apply_gate_by_name(state: &QubitState, name: &str) -> QnodeResult<QubitState> {
    let gate: Gate = name.parse()?;
    Ok(apply_gate(state, gate))
}

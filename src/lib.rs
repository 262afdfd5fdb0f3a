// src/lib.rs

//! `qnode` - A single-qubit state engine for concept-node visualisations
//!
//! Every node in a visualisation holds one qubit. This crate provides the
//! mathematics behind it: complex amplitudes, a closed catalogue of gates,
//! Born-rule measurement with an injectable random source, and Bloch-sphere
//! coordinates for drawing. A [`Network`] ties nodes and their purely visual
//! link strengths together for the surrounding application.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod bloch;
pub mod validation;
pub mod network;

// Re-export the most common types for easier top-level use
pub use crate::core::{
    Amplitude, Measurement, NodeId, Outcome, QnodeError, QnodeResult, QubitState,
    add, exp_imaginary, format_complex, magnitude, make, multiply,
};
pub use operations::{Gate, GateMatrix, apply_gate, apply_gate_by_name};
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{MeasurementCounts, Simulator, SimulatorConfig, collapse, measure, probability_of_one};
pub use bloch::{BlochVector, bloch_coordinates};
pub use validation::{ValidationMode, check_normalization};
pub use network::{ConceptNode, Link, Network, NetworkSnapshot, NodeSnapshot};

// Example 1: Superposition and a phase flip
// A Z gate changes the relative phase of a superposition but not its
// measurement probability; the Bloch point moves around the equator.
/// ```
/// use qnode::{Gate, QubitState, apply_gate, bloch_coordinates, probability_of_one};
///
/// let plus = apply_gate(&QubitState::ZERO, Gate::Hadamard);
/// let minus = apply_gate(&plus, Gate::PauliZ);
///
/// assert!((probability_of_one(&plus) - 0.5).abs() < 1e-6);
/// assert!((probability_of_one(&minus) - 0.5).abs() < 1e-6);
///
/// let before = bloch_coordinates(&plus);
/// let after = bloch_coordinates(&minus);
/// assert!(before.z.abs() < 1e-9 && after.z.abs() < 1e-9);
/// assert!((before.x - 1.0).abs() < 1e-9);
/// assert!((after.x + 1.0).abs() < 1e-9);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Reproducible measurement
// A seeded simulator yields the same outcome sequence on every run.
/// ```
/// use qnode::{Gate, QubitState, Simulator, QnodeError, apply_gate};
///
/// fn run() -> Result<Vec<u8>, QnodeError> {
///     let plus = apply_gate(&QubitState::ZERO, Gate::Hadamard);
///     let mut simulator = Simulator::seeded(2024);
///     (0..8).map(|_| simulator.measure(&plus).map(|m| m.outcome.bit())).collect()
/// }
///
/// assert_eq!(run()?, run()?);
/// # Ok::<(), QnodeError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

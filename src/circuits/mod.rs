// src/circuits/mod.rs

//! Ordered sequences of gates applied to one qubit.
//!
//! A `Circuit` is nothing more than the order in which gates are applied to a
//! single state. There are no wires to other qubits and no controlled gates.

use crate::core::{QnodeResult, QubitState};
use crate::operations::{Gate, apply_gate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of gates for a single qubit.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Circuit {
    /// Applied front to back.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    /// Parses a whitespace- or comma-separated list of gate names, e.g. `"H Z T"`.
    ///
    /// # Errors
    /// `QnodeError::InvalidArgument` on the first token outside the catalogue.
    pub fn parse(source: &str) -> QnodeResult<Self> {
        let gates = source
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| token.parse::<Gate>())
            .collect::<QnodeResult<Vec<Gate>>>()?;
        Ok(Self { gates })
    }

    /// Appends a gate to the end of the sequence.
    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Appends several gates in order.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        self.gates.extend(gates);
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Returns the total number of gates in the circuit.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Applies every gate to `state` from first to last.
    pub fn apply(&self, state: &QubitState) -> QubitState {
        self.gates.iter().fold(*state, |acc, gate| apply_gate(&acc, *gate))
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
#[derive(Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single gate. Returns `self` to allow for continued method chaining.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    /// Adds several gates in order.
    pub fn add_gates<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        self.circuit.add_gates(gates);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GATE_WIDTH: usize = 7; // e.g. "───H───"
        const H_WIRE: char = '─';

        write!(f, "q: ")?;
        if self.gates.is_empty() {
            return write!(f, "{}", H_WIRE.to_string().repeat(GATE_WIDTH));
        }
        for gate in &self.gates {
            let symbol = gate.symbol();
            let pad = GATE_WIDTH - symbol.chars().count();
            let pre = pad / 2;
            write!(
                f,
                "{}{}{}",
                H_WIRE.to_string().repeat(pre),
                symbol,
                H_WIRE.to_string().repeat(pad - pre)
            )?;
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

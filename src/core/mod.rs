// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod complex;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `qnode::core::TypeName`
pub use complex::{Amplitude, add, exp_imaginary, format_complex, magnitude, make, multiply};
pub use error::{NodeId, QnodeError, QnodeResult};
pub use state::{Measurement, Outcome, QubitState};

pub mod constants;
pub use constants::qnode_constants::{NORM_TOLERANCE, T_PHASE}; // Re-export

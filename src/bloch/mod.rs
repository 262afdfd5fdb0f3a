// src/bloch/mod.rs

//! Bloch-sphere coordinates of a single-qubit state, for display.
//!
//! A normalized state `alpha|0⟩ + beta|1⟩` maps to a point on the unit sphere
//! with polar angle `theta = 2 asin(|beta|)` and azimuth equal to the phase of
//! `beta` relative to `alpha`. `|0⟩` sits on the north pole, `|1⟩` on the
//! south pole and equal superpositions on the equator.

use crate::core::QubitState;
use crate::core::complex::magnitude;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on (or, for non-normalized input, near) the Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// X coordinate, `sin θ cos φ`.
    pub x: f64,
    /// Y coordinate, `sin θ sin φ`.
    pub y: f64,
    /// Z coordinate, `cos θ`. `+1` is `|0⟩`, `-1` is `|1⟩`.
    pub z: f64,
}

impl BlochVector {
    /// Euclidean length; 1 for every state the engine produces.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Spherical angles `(theta, phi)` with `theta ∈ [0, π]` and `phi ∈ (-π, π]`.
    pub fn angles(&self) -> (f64, f64) {
        let theta = self.z.clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        (theta, phi)
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// Derives the Bloch coordinates of `state`.
///
/// `|beta|` is clamped to `[0, 1]` before `asin` so rounding overshoot never
/// produces NaN. `atan2(0, 0)` is zero, so the relative phase of a basis
/// state is zero.
pub fn bloch_coordinates(state: &QubitState) -> BlochVector {
    let m = magnitude(state.beta()).clamp(0.0, 1.0);
    let theta = 2.0 * m.asin();
    let phi = state.beta().im.atan2(state.beta().re) - state.alpha().im.atan2(state.alpha().re);
    BlochVector {
        x: theta.sin() * phi.cos(),
        y: theta.sin() * phi.sin(),
        z: theta.cos(),
    }
}

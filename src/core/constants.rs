//! Numeric constants shared by the engine.

/// Tolerances used when comparing floating-point amplitudes.
pub mod qnode_constants {
    /// Default allowed deviation of `|alpha|² + |beta|²` from 1.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Phase of the T gate's lower diagonal entry.
    pub const T_PHASE: f64 = std::f64::consts::FRAC_PI_4;
}

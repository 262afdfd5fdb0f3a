// src/core/complex.rs

//! Complex arithmetic primitives used by every other part of the engine.
//!
//! Amplitudes are plain `num_complex::Complex<f64>` values. The free functions
//! here name the handful of operations the gate catalogue and the measurement
//! rules are written in terms of, so callers never need to reach into the
//! components themselves.

use num_complex::Complex;

/// A complex amplitude of a basis outcome.
pub type Amplitude = Complex<f64>;

/// Creates a complex value from its real and imaginary components.
pub const fn make(re: f64, im: f64) -> Amplitude {
    Complex::new(re, im)
}

/// Componentwise sum.
pub fn add(a: Amplitude, b: Amplitude) -> Amplitude {
    make(a.re + b.re, a.im + b.im)
}

/// Standard complex product `(a.re*b.re - a.im*b.im) + i(a.re*b.im + a.im*b.re)`.
pub fn multiply(a: Amplitude, b: Amplitude) -> Amplitude {
    make(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

/// Modulus `sqrt(re² + im²)`. Never negative.
pub fn magnitude(c: Amplitude) -> f64 {
    (c.re * c.re + c.im * c.im).sqrt()
}

/// The unit-circle point `e^(iθ) = cos θ + i sin θ`.
pub fn exp_imaginary(theta: f64) -> Amplitude {
    make(theta.cos(), theta.sin())
}

/// Renders an amplitude as `r±ii` with two decimals, e.g. `0.71+0.71i`.
///
/// Negative zero in the imaginary part prints as `+0.00i`.
pub fn format_complex(c: Amplitude) -> String {
    let sign = if c.im >= 0.0 { '+' } else { '-' };
    format!("{:.2}{}{:.2}i", c.re, sign, c.im.abs())
}

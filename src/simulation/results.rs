// src/simulation/results.rs
use crate::core::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tally of outcomes from repeated measurements of the same state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementCounts {
    /// Number of shots that came out `|0⟩`.
    pub zeros: usize,
    /// Number of shots that came out `|1⟩`.
    pub ones: usize,
}

impl MeasurementCounts {
    /// Records one outcome. (Internal visibility)
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Zero => self.zeros += 1,
            Outcome::One => self.ones += 1,
        }
    }

    /// Total number of recorded shots.
    pub fn shots(&self) -> usize {
        self.zeros + self.ones
    }

    /// Observed frequency of `|1⟩`; zero when nothing was recorded.
    pub fn frequency_of_one(&self) -> f64 {
        match self.shots() {
            0 => 0.0,
            n => self.ones as f64 / n as f64,
        }
    }
}

impl fmt::Display for MeasurementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement Counts ({} shots):", self.shots())?;
        writeln!(f, "  |0⟩: {}", self.zeros)?;
        write!(f, "  |1⟩: {} (frequency {:.3})", self.ones, self.frequency_of_one())
    }
}

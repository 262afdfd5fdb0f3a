//! Error handling logic

use std::fmt;
use thiserror::Error;

/// Identifier of a concept node inside a [`crate::Network`].
/// Ids are handed out by the network and never reused within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Convenience result alias used across the crate.
pub type QnodeResult<T> = Result<T, QnodeError>;

/// Failures the engine and the node network can report.
///
/// Complex arithmetic and applying a [`crate::Gate`] value never fail; errors
/// only come from parsing caller-supplied names, opt-in state validation and
/// references into a [`crate::Network`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QnodeError {
    /// A caller-supplied argument is outside what the operation accepts,
    /// e.g. a gate name outside the catalogue or a link strength outside `[0, 1]`.
    #[error("Invalid Argument: {message}")]
    InvalidArgument {
        /// InvalidArgument failure message
        message: String,
    },

    /// A state failed the normalization check under strict validation.
    #[error("Invalid State: |alpha|^2 + |beta|^2 = {norm_sqr} (tolerance {tolerance})")]
    InvalidState {
        /// Observed sum of squared amplitude magnitudes.
        norm_sqr: f64,
        /// Tolerance the check was run with.
        tolerance: f64,
    },

    /// The referenced node does not exist in the network.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
}

impl QnodeError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        QnodeError::InvalidArgument { message: message.into() }
    }
}

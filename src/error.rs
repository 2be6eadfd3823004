//! Failure conditions reported by the data-structure core.
//!
//! Every condition is recoverable and user-correctable. An operation that fails
//! leaves its structure exactly as it was before the call.

use thiserror::Error;

/// Result type for core operations.
pub type VizResult<T> = Result<T, VizError>;

/// Named failure conditions of the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VizError {
    /// A blank value was supplied where a token or key is required.
    #[error("Please enter a {what}.")]
    EmptyInput {
        /// What the caller was asked for ("value", "node name", ...)
        what: &'static str,
    },

    /// A non-integer was supplied where the tree expects an integer key.
    #[error("'{input}' is not a valid integer.")]
    InvalidKey {
        /// The rejected raw input
        input: String,
    },

    /// Removal from an empty container.
    #[error("{container} is empty.")]
    Underflow {
        /// "Stack" or "Queue"
        container: &'static str,
    },

    /// Insertion into a full container.
    #[error("{container} is full (capacity {capacity}).")]
    Overflow {
        /// "Stack" or "Queue"
        container: &'static str,
        /// Fixed capacity of the container
        capacity: usize,
    },

    /// The key is already present in the tree.
    #[error("Value {key} already exists in the tree.")]
    DuplicateKey {
        /// The rejected key
        key: i64,
    },

    /// The node is already present in the graph.
    #[error("Node '{id}' already exists.")]
    DuplicateNode {
        /// The rejected node id
        id: String,
    },

    /// An edge references a node that is not in the graph.
    #[error("Both nodes must exist in the graph ('{id}' is missing).")]
    MissingEndpoint {
        /// The first endpoint found missing
        id: String,
    },

    /// A traversal was requested from a node that is not in the graph.
    #[error("Start node '{id}' is not in the graph.")]
    UnknownSource {
        /// The requested source id
        id: String,
    },
}

impl VizError {
    /// Returns true for conditions caused by malformed input rather than by
    /// the state of a structure.
    ///
    /// Presentation layers show these as warnings and the rest as errors.
    pub fn is_input_error(&self) -> bool {
        matches!(self, VizError::EmptyInput { .. } | VizError::InvalidKey { .. })
    }

    /// Short stable name of the condition, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            VizError::EmptyInput { .. } => "EmptyInput",
            VizError::InvalidKey { .. } => "InvalidKey",
            VizError::Underflow { .. } => "Underflow",
            VizError::Overflow { .. } => "Overflow",
            VizError::DuplicateKey { .. } => "DuplicateKey",
            VizError::DuplicateNode { .. } => "DuplicateNode",
            VizError::MissingEndpoint { .. } => "MissingEndpoint",
            VizError::UnknownSource { .. } => "UnknownSource",
        }
    }
}

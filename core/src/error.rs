use thiserror::Error;

/// Failures raised by graph construction and name lookup.
///
/// "No path within the depth limit" is not an error; it is reported as a
/// negative [`crate::SearchOutcome`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("invalid weight {weight} on edge {from} → {to}: weights must be finite and non-negative")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("no edge {from} → {to}")]
    MissingEdge { from: String, to: String },
}

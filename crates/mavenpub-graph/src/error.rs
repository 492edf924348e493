use miette::Diagnostic;
use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

/// Errors from graph mutation and lookup.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum GraphError {
    /// The node was never added or has been removed.
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    /// The connection was never made or has been removed.
    #[error("Unknown connection {0}")]
    UnknownConnection(EdgeId),
}

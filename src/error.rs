//! Error taxonomy for decoding and diagram annotation.
//!
//! No error is retried: any failure aborts the conversion of that chromosome.

use thiserror::Error;

use crate::chromosome::NodeId;
use crate::functions::UnknownFunction;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures caused by corrupt or foreign chromosome text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed header at offset {offset}: {reason}")]
    MalformedHeader { offset: usize, reason: String },

    #[error("malformed node record {id} at offset {offset}: {reason}")]
    MalformedNode {
        /// Node id the decoder expected at this position.
        id: NodeId,
        offset: usize,
        reason: String,
    },

    #[error("malformed output reference at offset {offset}: {reason}")]
    MalformedOutput { offset: usize, reason: String },

    #[error("node {node} uses an unknown function")]
    UnknownFunction {
        node: NodeId,
        #[source]
        source: UnknownFunction,
    },
}

impl DecodeError {
    pub fn header(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            offset,
            reason: reason.into(),
        }
    }

    pub fn node(id: NodeId, offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            id,
            offset,
            reason: reason.into(),
        }
    }

    pub fn output(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedOutput {
            offset,
            reason: reason.into(),
        }
    }
}

/// Failures caused by a template that does not honour the diagram contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("element \"{label}\" not found in svg template")]
    ElementNotFound { label: String },

    #[error("element \"{label}\" has no numeric '{attribute}' attribute")]
    Attribute { label: String, attribute: String },

    #[error("invalid svg template: {0}")]
    Template(String),
}

impl DiagramError {
    pub fn not_found(label: impl Into<String>) -> Self {
        Self::ElementNotFound {
            label: label.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Diagram(#[from] DiagramError),
}

//! Error types for the Breadboard circuit editor core.
//!
//! This module provides a unified error type [`BreadboardError`] that covers
//! all error conditions that can occur while parsing diagram files, editing
//! a diagram, and validating its topology.

use thiserror::Error;

use crate::circuit::TopologyIssue;

/// Result type alias using [`BreadboardError`].
pub type Result<T> = std::result::Result<T, BreadboardError>;

/// Unified error type for all Breadboard operations.
#[derive(Error, Debug)]
pub enum BreadboardError {
    // ============ DSL Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Unknown element kind keyword
    #[error("Unknown element kind '{kind}' at line {line}")]
    UnknownElementKind { kind: String, line: usize },

    /// Invalid element definition
    #[error("Invalid element '{name}' at line {line}: {message}")]
    InvalidElement {
        name: String,
        line: usize,
        message: String,
    },

    // ============ Editing Errors ============
    /// Element id does not exist in the diagram
    #[error("Element '{id}' not found in diagram")]
    ElementNotFound { id: String },

    /// Wire id does not exist in the diagram
    #[error("Wire '{id}' not found in diagram")]
    WireNotFound { id: String },

    /// Element id already taken
    #[error("Duplicate element id '{id}'")]
    DuplicateElement { id: String },

    /// Wire id already taken, or the two elements are already wired
    #[error("Duplicate wire '{id}' between '{source_id}' and '{target_id}'")]
    DuplicateWire {
        id: String,
        source_id: String,
        target_id: String,
    },

    /// Wire would connect an element to itself
    #[error("Element '{id}' cannot be wired to itself")]
    SelfConnection { id: String },

    /// Placement would overlap an existing element
    #[error("Element '{id}' would overlap '{other}'")]
    Overlap { id: String, other: String },

    /// Diagram already holds its only allowed power source
    #[error("Diagram already contains a power source ('{existing}')")]
    PowerSourceLimit { existing: String },

    /// Parameter name not part of the element kind's record
    #[error("Unknown parameter '{param}' for {kind}")]
    UnknownParameter { kind: String, param: String },

    /// Parameter value rejected
    #[error("Invalid parameter '{param}' for {kind}: {message}")]
    InvalidParameter {
        kind: String,
        param: String,
        message: String,
    },

    /// Polarity set on a kind without directional polarity
    #[error("Element '{id}' ({kind}) has no polarity")]
    NotPolar { id: String, kind: String },

    // ============ Topology Errors ============
    /// Circuit failed topology validation
    #[error(transparent)]
    Topology(#[from] TopologyIssue),

    // ============ I/O Errors ============
    /// Error reading diagram file
    #[error("Failed to read diagram file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a report
    #[error("Output error: {message}")]
    OutputError { message: String },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl BreadboardError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid element error
    pub fn invalid_element(name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::InvalidElement {
            name: name.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(
        kind: impl Into<String>,
        param: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            kind: kind.into(),
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an element-not-found error
    pub fn element_not_found(id: impl ToString) -> Self {
        Self::ElementNotFound { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_issue_is_transparent() {
        let err: BreadboardError = TopologyIssue::NoPowerSource.into();
        assert_eq!(err.to_string(), TopologyIssue::NoPowerSource.to_string());
    }

    #[test]
    fn test_parse_error_message() {
        let err = BreadboardError::parse(3, "expected x coordinate");
        assert_eq!(err.to_string(), "Parse error at line 3: expected x coordinate");
    }
}

//! Error types for export operations

use std::fmt;

/// Errors that can occur while producing export output
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// A format name did not match any known export format
    UnknownFormat(String),
    /// A list type name did not match any known list type
    UnknownListType(String),
    /// A custom-format template failed to compile or render
    Template(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::UnknownFormat(name) => write!(f, "Unknown export format '{name}'"),
            ExportError::UnknownListType(name) => write!(f, "Unknown list type '{name}'"),
            ExportError::Template(msg) => write!(f, "Template error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

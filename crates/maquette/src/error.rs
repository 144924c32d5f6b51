//! Error types for Maquette operations.
//!
//! This module provides the main error type [`MaquetteError`] which wraps
//! the error conditions that can occur while loading documents, mutating
//! the diagram, and writing output.

use std::{io, ops::Range};

use thiserror::Error;

use maquette_core::model::ModelError;

/// The main error type for Maquette operations.
///
/// "Entity not found" during update or delete is deliberately *not* an
/// error anywhere in the crate — those are silent no-ops. The `Model`
/// variant is the one fail-fast condition: a mutation left the diagram
/// referentially inconsistent, which indicates a bug in the calling layer.
#[derive(Debug, Error)]
pub enum MaquetteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A diagram document could not be read or resolved.
    #[error("{message}")]
    Document {
        message: String,
        /// Document text, when available, for span reporting.
        src: Option<String>,
        /// Byte range of the offending region within `src`.
        span: Option<Range<usize>>,
    },

    #[error("Diagram integrity error: {0}")]
    Model(#[from] ModelError),
}

impl MaquetteError {
    /// Create a `Document` error without source context.
    pub fn new_document_error(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
            src: None,
            span: None,
        }
    }

    /// Create a `Document` error carrying the document text and the span of
    /// the offending region.
    pub fn new_document_error_with_source(
        message: impl Into<String>,
        src: impl Into<String>,
        span: Option<Range<usize>>,
    ) -> Self {
        Self::Document {
            message: message.into(),
            src: Some(src.into()),
            span,
        }
    }
}

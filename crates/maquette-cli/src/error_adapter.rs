//! Error adapter for converting MaquetteError to miette diagnostics.
//!
//! This module bridges the library's standard error types and miette's rich
//! diagnostic formatting used in the CLI. Document errors that carry their
//! source text are rendered with a labeled source snippet; everything else
//! gets a plain diagnostic with a `maquette::*` code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use maquette::MaquetteError;

/// Adapter implementing [`MietteDiagnostic`] over a borrowed error.
pub struct ErrorAdapter<'a>(pub &'a MaquetteError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            MaquetteError::Io(_) => "maquette::io",
            MaquetteError::Document { .. } => "maquette::document",
            MaquetteError::Model(_) => "maquette::model",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            MaquetteError::Model(_) => Some(Box::new(
                "the diagram reached an inconsistent state; this is a bug worth reporting",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            MaquetteError::Document { src: Some(src), .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match &self.0 {
            MaquetteError::Document {
                src: Some(_),
                span: Some(span),
                ..
            } => {
                let label =
                    LabeledSpan::new_primary_with_span(None, SourceSpan::from(span.clone()));
                Some(Box::new(std::iter::once(label)))
            }
            _ => None,
        }
    }
}

/// Wrap an error for rendering. Returns a list so that callers render each
/// diagnostic independently, even though every current error maps to one.
pub fn to_reportables(err: &MaquetteError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}

//! Error reporting collaborator for recovery mode.
//!
//! In recovery mode the parser does not return statement-level errors; it
//! hands them to a [`ParseLogger`] and replaces the statement with a
//! placeholder. [`TracingLogger`] forwards to `tracing`; [`CollectingLogger`]
//! keeps every report for later inspection.

use tracing::error;

use crate::ParseError;

/// Receives errors the parser recovered from.
pub trait ParseLogger {
    fn error(&mut self, err: &ParseError);
}

/// Logs recovered errors through `tracing::error!`.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingLogger;

impl ParseLogger for TracingLogger {
    fn error(&mut self, err: &ParseError) {
        error!(
            filename = %err.filename,
            line = err.line,
            "{}",
            err.kind
        );
    }
}

/// Collects recovered errors in order.
#[derive(Clone, Debug, Default)]
pub struct CollectingLogger {
    errors: Vec<ParseError>,
}

impl CollectingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

impl ParseLogger for CollectingLogger {
    fn error(&mut self, err: &ParseError) {
        self.errors.push(err.clone());
    }
}

impl<L: ParseLogger + ?Sized> ParseLogger for &mut L {
    fn error(&mut self, err: &ParseError) {
        (**self).error(err);
    }
}

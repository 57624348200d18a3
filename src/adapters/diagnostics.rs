use crate::domain::ports::{Diagnostic, DiagnosticSink};
use std::sync::{Arc, Mutex, PoisonError};

/// Forwards diagnostics to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::FetchTransport { url, reason } => {
                tracing::error!(%url, %reason, "❌ Unable to fetch customer dataset");
            }
            Diagnostic::FetchStatus { url, status } => {
                tracing::error!(%url, status, "❌ Customer dataset returned non-success status");
            }
            Diagnostic::RecordRejected {
                line_number,
                line,
                error,
            } => {
                tracing::warn!(
                    line_number,
                    %line,
                    %error,
                    "⚠️ Skipping invalid customer record"
                );
            }
            Diagnostic::InvalidSortCriteria { error } => {
                tracing::error!(%error, "❌ Invalid customer sort criteria");
            }
        }
    }
}

/// Keeps every diagnostic in memory so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

//! Diagnostics collected while converting one document.
//!
//! Handlers never fail on malformed-but-tolerable input; anything they could
//! not map into the target schema is recorded here and surfaced to the
//! caller once handling completes.

/// Severity of a conversion diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A single (severity, message) record produced during one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Append-only diagnostic sink for one `handle` invocation.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            severity,
            message: message.into(),
        });
    }

    /// Hand the accumulated entries back to the caller, in insertion order.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

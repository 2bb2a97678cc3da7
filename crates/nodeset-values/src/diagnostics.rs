//! Diagnostics collected while parsing.
//!
//! Lenient defaults and unimplemented paths never abort a parse. They are
//! recorded here, in order, and mirrored to `tracing` so they show up in the
//! generator log as well as in the returned list.

use std::fmt;

use tracing::{debug, error, info, warn};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// D001: GUID text did not split into five hex groups
    MalformedGuid,
    /// D002: Date-time text did not match `YYYY-MM-DDTHH:MM:SS`
    MalformedTimestamp,
    /// D003: Value kind has no parser yet
    UnimplementedValueKind,
    /// D004: Got a node that is not the element the parser expects
    UnexpectedNode,
    /// D005: Declared type name is not a builtin type
    UnknownTypeName,
}

impl DiagnosticKind {
    /// Returns the diagnostic code string (e.g., "D001").
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedGuid => "D001",
            DiagnosticKind::MalformedTimestamp => "D002",
            DiagnosticKind::UnimplementedValueKind => "D003",
            DiagnosticKind::UnexpectedNode => "D004",
            DiagnosticKind::UnknownTypeName => "D005",
        }
    }

    /// Level used when the kind is reported without an explicit one.
    pub fn default_level(&self) -> Level {
        match self {
            DiagnosticKind::MalformedGuid
            | DiagnosticKind::MalformedTimestamp
            | DiagnosticKind::UnexpectedNode => Level::Error,
            DiagnosticKind::UnimplementedValueKind | DiagnosticKind::UnknownTypeName => Level::Warn,
        }
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:?}: {}", self.kind.code(), self.level, self.message)
    }
}

/// Ordered sink for diagnostics. One sink is usually shared by all parse calls
/// for a document.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic at the kind's default level.
    pub fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.report_at(kind.default_level(), kind, message);
    }

    /// Records a diagnostic at an explicit level.
    pub fn report_at(&mut self, level: Level, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        let code = kind.code();
        match level {
            Level::Debug => debug!(code, kind = ?kind, "{message}"),
            Level::Info => info!(code, kind = ?kind, "{message}"),
            Level::Warn => warn!(code, kind = ?kind, "{message}"),
            Level::Error => error!(code, kind = ?kind, "{message}"),
        }
        self.entries.push(Diagnostic { level, kind, message });
    }

    /// All diagnostics in the order they were recorded.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if any diagnostic of the given kind was recorded.
    pub fn contains(&self, kind: DiagnosticKind) -> bool {
        self.entries.iter().any(|d| d.kind == kind)
    }

    /// Iterates over diagnostics at or above `level`.
    pub fn at_least(&self, level: Level) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.level >= level)
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}

#![deny(missing_docs)]

//! # Generation Report
//!
//! Structured diagnostics returned alongside a generated document.
//! The core never writes to the console; callers decide how to surface these.

use std::fmt;

/// How noteworthy a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Expected degradation (e.g. a route without endpoints).
    Info,
    /// Something the operator should probably look at.
    Warning,
}

/// A single note produced while reading or translating routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// The route pattern concerned, if any.
    pub route: Option<String>,
    /// Human readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates an `Info` diagnostic.
    pub fn info(route: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            route: route.map(str::to_string),
            message: message.into(),
        }
    }

    /// Creates a `Warning` diagnostic.
    pub fn warning(route: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            route: route.map(str::to_string),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.route {
            Some(route) => write!(f, "{}: {}", route, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Counters and diagnostics for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of route patterns in the input.
    pub routes_seen: usize,
    /// Number of distinct paths produced. A route that replaces an earlier
    /// one with the same path is not counted again.
    pub routes_translated: usize,
    /// Number of operations across all path items.
    pub operations: usize,
    /// Collected diagnostics, in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics at `Warning` level.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }
}

//! Classified findings produced by the check workflow.
//!
//! Each probe contributes lines to one of three buckets; the buckets are
//! owned by the check command and handed once to the reporting layer.

use serde::Serialize;

/// Severity of a check finding, and of the report as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Aggregated check findings.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CheckReport {
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl CheckReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding in the success bucket.
    pub fn success(&mut self, msg: impl Into<String>) {
        self.successes.push(msg.into());
    }

    /// Record a finding in the warning bucket.
    pub fn warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Record a finding in the error bucket.
    pub fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Absorb another report's findings, preserving order.
    pub fn merge(&mut self, other: CheckReport) {
        self.successes.extend(other.successes);
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    /// Success-bucket lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Warning-bucket lines.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Error-bucket lines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Overall severity: error beats warning beats success.
    pub fn overall(&self) -> Severity {
        if !self.errors.is_empty() {
            Severity::Error
        } else if !self.warnings.is_empty() {
            Severity::Warning
        } else {
            Severity::Success
        }
    }

    /// True when both the warning and error buckets are empty.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

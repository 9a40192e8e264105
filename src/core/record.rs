//! Log record structure

use super::field::{sanitize_text, FieldSet};
use super::severity::Severity;
use chrono::{DateTime, Utc};
use std::fmt;
use std::panic::Location;

/// Source location of the emitting call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    pub(crate) fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A single emitted record; immutable once constructed.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub fields: FieldSet,
    pub caller: Option<Caller>,
}

impl LogRecord {
    /// The message is sanitized so one record always occupies exactly one
    /// output line; this also prevents log injection through embedded
    /// newlines.
    pub fn new(severity: Severity, message: String) -> Self {
        Self {
            severity,
            message: sanitize_text(&message),
            timestamp: Utc::now(),
            fields: FieldSet::new(),
            caller: None,
        }
    }

    pub fn with_fields(mut self, fields: FieldSet) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }
}

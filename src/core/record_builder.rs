//! Fluent record construction
//!
//! A builder pattern for emitting records with structured fields.

use super::field::{Field, FieldValue};
use super::logger::Logger;
use super::severity::Severity;
use std::panic::Location;

/// Builder for a single record
///
/// # Example
///
/// ```
/// use unilog::prelude::*;
///
/// let logger = Logger::builder().writer(std::io::sink()).build();
///
/// logger.build_record(Severity::Info)
///     .message("Request processed")
///     .field("user_id", 12345)
///     .field("status", 200)
///     .log();
/// ```
pub struct RecordBuilder<'a> {
    logger: &'a Logger,
    level: Severity,
    message: String,
    fields: Vec<Field>,
    location: &'static Location<'static>,
}

impl<'a> RecordBuilder<'a> {
    pub(crate) fn new(
        logger: &'a Logger,
        level: Severity,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            logger,
            level,
            message: String::new(),
            fields: Vec::new(),
            location,
        }
    }

    /// Set the record message
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach a structured field; later duplicates win.
    #[must_use]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.push(Field::new(key, value));
        self
    }

    /// Build and emit the record
    ///
    /// The caller location attached to the record is the `build_record`
    /// call site.
    pub fn log(self) {
        self.logger
            .emit(self.level, self.message, &self.fields, self.location);
    }
}

impl Logger {
    /// Start a fluent record at the given severity
    #[track_caller]
    pub fn build_record(&self, level: Severity) -> RecordBuilder<'_> {
        RecordBuilder::new(self, level, Location::caller())
    }
}

//! Logger handles and the sink builder

use super::config::{FatalHook, SinkSettings};
use super::error::Result;
use super::field::{Field, FieldSet};
use super::format::OutputFormat;
use super::metrics::SinkMetrics;
use super::record::{Caller, LogRecord};
use super::severity::Severity;
use super::sink::Sink;
use super::timestamp::TimestampFormat;
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

/// A handle binding a base field set to a shared sink
///
/// Handles are cheap to clone and persistent: deriving a child with
/// [`Logger::with_fields`] never mutates the parent. Every handle derived
/// from one builder shares the sink (stream, settings, metrics, writer
/// thread), so a `flush` through any of them drains them all.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<Sink>,
    fields: FieldSet,
}

impl Logger {
    /// Create a builder for a new sink and its root handle
    ///
    /// # Example
    /// ```
    /// use unilog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(Severity::Debug)
    ///     .format(OutputFormat::Json)
    ///     .writer(std::io::sink())
    ///     .build();
    /// logger.debug("ready");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Derive a handle with extra bound fields
    ///
    /// The new fields overlay the receiver's on key collision; the receiver
    /// itself is unchanged.
    #[must_use]
    pub fn with_fields(&self, fields: impl IntoIterator<Item = Field>) -> Logger {
        Logger {
            sink: Arc::clone(&self.sink),
            fields: self.fields.merged(fields),
        }
    }

    /// Derive a handle with one extra bound field
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<super::field::FieldValue>,
    {
        self.with_fields([Field::new(key, value)])
    }

    /// The fields this handle stamps onto every record it emits
    pub fn bound_fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Emit a pre-formatted message at the given severity
    #[track_caller]
    pub fn log(&self, level: Severity, message: impl Into<String>) {
        self.emit(level, message.into(), &[], Location::caller());
    }

    /// Emit a message with call-site fields; these win over the handle's
    /// bound fields on key collision.
    #[track_caller]
    pub fn log_with_fields(&self, level: Severity, message: impl Into<String>, fields: &[Field]) {
        self.emit(level, message.into(), fields, Location::caller());
    }

    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.emit(Severity::Trace, message.into(), &[], Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.emit(Severity::Debug, message.into(), &[], Location::caller());
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.emit(Severity::Info, message.into(), &[], Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.emit(Severity::Warn, message.into(), &[], Location::caller());
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.emit(Severity::Error, message.into(), &[], Location::caller());
    }

    /// Emit at fatal severity: the record is written and the sink flushed
    /// best-effort, then the sink's fatal hook runs. The default hook
    /// terminates the process with a non-zero status, so this call normally
    /// does not return.
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.emit(Severity::Fatal, message.into(), &[], Location::caller());
    }

    /// Helper for structured info logging
    #[track_caller]
    pub fn info_with_fields(&self, message: impl Into<String>, fields: &[Field]) {
        self.emit(Severity::Info, message.into(), fields, Location::caller());
    }

    /// Helper for structured error logging
    #[track_caller]
    pub fn error_with_fields(&self, message: impl Into<String>, fields: &[Field]) {
        self.emit(Severity::Error, message.into(), fields, Location::caller());
    }

    pub(crate) fn emit(
        &self,
        level: Severity,
        message: String,
        call_fields: &[Field],
        location: &'static Location<'static>,
    ) {
        let settings = self.sink.settings_snapshot();

        if level < settings.min_level {
            self.sink.metrics().record_suppressed();
            return;
        }

        let mut record = LogRecord::new(level, message)
            .with_fields(self.fields.merged(call_fields.iter().cloned()));
        if settings.capture_caller {
            record = record.with_caller(Caller::from_location(location));
        }

        let mut line = settings
            .format
            .render(&record, &settings.timestamp, settings.color);
        line.push('\n');
        self.sink.submit(line.into_bytes());

        if level.is_terminal() {
            // Unconditional: the hook runs even when the write failed.
            let _ = self.sink.flush();
            (self.sink.fatal_hook())();
        }
    }

    /// Block until all previously accepted records reach the underlying
    /// stream. Does not stop other threads from emitting in the meantime.
    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Counters for sink observability
    pub fn metrics(&self) -> &SinkMetrics {
        self.sink.metrics()
    }

    /// Replace the minimum severity; not retroactive to records already
    /// emitted.
    pub fn set_min_level(&self, level: Severity) {
        self.sink.update_settings(|s| s.min_level = level);
    }

    /// Replace the rendering layout
    pub fn set_format(&self, format: OutputFormat) {
        self.sink.update_settings(|s| s.format = format);
    }

    /// Toggle call-site resolution
    pub fn set_capture_caller(&self, capture: bool) {
        self.sink.update_settings(|s| s.capture_caller = capture);
    }
}

/// Builder for constructing a sink and its root [`Logger`] handle
///
/// Invalid string-typed options fall back to their defaults rather than
/// failing: the facade never surfaces configuration errors.
///
/// # Example
/// ```
/// use unilog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Severity::Debug)
///     .format(OutputFormat::Json)
///     .capture_caller(true)
///     .writer(std::io::stdout())
///     .build();
/// logger.info("configured");
/// ```
pub struct LoggerBuilder {
    settings: SinkSettings,
    writer: Option<Box<dyn Write + Send>>,
    buffered: bool,
    fatal_hook: Option<FatalHook>,
    fields: FieldSet,
}

impl LoggerBuilder {
    /// Create a new builder with default values: `Info` minimum, human
    /// format, caller capture off, stderr output.
    pub fn new() -> Self {
        Self {
            settings: SinkSettings::default(),
            writer: None,
            buffered: false,
            fatal_hook: None,
            fields: FieldSet::new(),
        }
    }

    /// Set the minimum severity
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Severity) -> Self {
        self.settings.min_level = level;
        self
    }

    /// Set the minimum severity from a name; unknown names fall back to the
    /// default (`Info`).
    #[must_use = "builder methods return a new value"]
    pub fn min_level_str(mut self, level: &str) -> Self {
        self.settings.min_level = level.parse().unwrap_or_default();
        self
    }

    /// Set the rendering layout
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.settings.format = format;
        self
    }

    /// Set the rendering layout from a name; unknown names fall back to the
    /// default (human).
    #[must_use = "builder methods return a new value"]
    pub fn format_str(mut self, format: &str) -> Self {
        self.settings.format = format.parse().unwrap_or_default();
        self
    }

    /// Set the timestamp format
    #[must_use = "builder methods return a new value"]
    pub fn timestamp(mut self, format: TimestampFormat) -> Self {
        self.settings.timestamp = format;
        self
    }

    /// Resolve and attach the call site of each emission
    #[must_use = "builder methods return a new value"]
    pub fn capture_caller(mut self, capture: bool) -> Self {
        self.settings.capture_caller = capture;
        self
    }

    /// Colorize the severity marker in human output
    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, color: bool) -> Self {
        self.settings.color = color;
        self
    }

    /// Set the output stream; defaults to stderr
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Route records through a dedicated writer thread instead of writing
    /// under a lock in the emitting thread. `flush` still blocks until the
    /// queue has drained.
    #[must_use = "builder methods return a new value"]
    pub fn buffered(mut self) -> Self {
        self.buffered = true;
        self
    }

    /// Bind a base field onto the root handle
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<super::field::FieldValue>,
    {
        self.fields.overlay(Field::new(key, value));
        self
    }

    /// Replace the fatal hook
    ///
    /// The hook runs after a fatal record has been written and flushed.
    /// The default is `std::process::exit(1)`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use unilog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .writer(std::io::sink())
    ///     .on_fatal(Arc::new(|| eprintln!("terminating")))
    ///     .build();
    /// logger.fatal("unrecoverable");
    /// ```
    #[must_use = "builder methods return a new value"]
    pub fn on_fatal(mut self, hook: FatalHook) -> Self {
        self.fatal_hook = Some(hook);
        self
    }

    /// Build the sink and return its root handle
    pub fn build(self) -> Logger {
        let writer = self
            .writer
            .unwrap_or_else(|| Box::new(std::io::stderr()));
        let fatal_hook = self
            .fatal_hook
            .unwrap_or_else(|| Arc::new(|| std::process::exit(1)));

        let sink = if self.buffered {
            Sink::queued(writer, self.settings, fatal_hook)
        } else {
            Sink::direct(writer, self.settings, fatal_hook)
        };

        Logger {
            sink: Arc::new(sink),
            fields: self.fields,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Sink configuration

use super::format::OutputFormat;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use std::sync::Arc;

/// Hook invoked after a fatal record has been written and flushed.
///
/// The default hook terminates the process with a non-zero status; embedders
/// and tests may install their own to intercept termination.
pub type FatalHook = Arc<dyn Fn() + Send + Sync>;

/// Filtering and rendering settings shared by every handle of a sink.
///
/// Settings are swapped atomically: a `log` call in flight completes under
/// the snapshot it observed, never a torn mix. The output stream itself is
/// fixed when the sink is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkSettings {
    /// Records below this severity are discarded before rendering
    pub min_level: Severity,
    /// Rendering layout
    pub format: OutputFormat,
    /// Timestamp rendering
    pub timestamp: TimestampFormat,
    /// Whether to resolve and attach the call site of each emission
    pub capture_caller: bool,
    /// Colorize the severity marker in human output
    pub color: bool,
}

impl Default for SinkSettings {
    fn default() -> Self {
        Self {
            min_level: Severity::Info,
            format: OutputFormat::Human,
            timestamp: TimestampFormat::default(),
            capture_caller: false,
            color: false,
        }
    }
}

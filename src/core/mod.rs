//! Core facade types

pub mod config;
pub mod error;
pub mod field;
pub mod format;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod record_builder;
pub mod severity;
pub(crate) mod sink;
pub mod timestamp;

pub use config::{FatalHook, SinkSettings};
pub use error::{LoggerError, Result};
pub use field::{field, Field, FieldSet, FieldValue};
pub use format::OutputFormat;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::SinkMetrics;
pub use record::{Caller, LogRecord};
pub use record_builder::RecordBuilder;
pub use severity::Severity;
pub use sink::DEFAULT_SHUTDOWN_TIMEOUT;
pub use timestamp::TimestampFormat;

//! # Unilog
//!
//! A minimal structured-logging facade: leveled records, ordered key/value
//! fields, caller-location capture, and human-readable or JSON rendering
//! over any writable stream.
//!
//! ## Features
//!
//! - **Leveled**: six ordered severities with a configurable minimum
//! - **Structured**: typed fields bound per-call or carried by derived
//!   context handles
//! - **Thread Safe**: records never interleave, whichever thread emits them
//! - **Guaranteed Delivery**: explicit `flush`, flush-on-drop, and a
//!   flush-before-exit fatal path

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        field, Caller, FatalHook, Field, FieldSet, FieldValue, LogRecord, Logger, LoggerBuilder,
        LoggerError, OutputFormat, RecordBuilder, Result, Severity, SinkMetrics, SinkSettings,
        TimestampFormat, DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

pub use core::{
    field, Caller, FatalHook, Field, FieldSet, FieldValue, LogRecord, Logger, LoggerBuilder,
    LoggerError, OutputFormat, RecordBuilder, Result, Severity, SinkMetrics, SinkSettings,
    TimestampFormat, DEFAULT_SHUTDOWN_TIMEOUT,
};

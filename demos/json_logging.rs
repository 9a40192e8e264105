//! Structured JSON logging
//!
//! Newline-delimited JSON records on stdout with caller capture and
//! context handles carrying request-scoped fields.
//!
//! Run with: cargo run --example json_logging

use unilog::prelude::*;

fn main() {
    let logger = Logger::builder()
        .min_level(Severity::Trace)
        .format(OutputFormat::Json)
        // Resolving the call site costs on every emission; enable it only
        // where the file:line is worth it.
        .capture_caller(true)
        .writer(std::io::stdout())
        .build();

    logger.trace("Trace message");
    logger.debug("Debug message");
    logger.info("Info message");
    logger.warn("Warning message");
    logger.error("Error message");

    let event = "test event";
    let topic = "test topic";
    let key = 10;

    unilog::error!(
        logger,
        "Failed to send event {} to topic {} with key {}",
        event,
        topic,
        key
    );

    logger.error_with_fields(
        "Failed to send event",
        &[field("event", event), field("topic", topic), field("key", key)],
    );

    let request = logger.with_fields([
        field("request_id", "127.0.0.1"),
        field("user_ip", "43.256.56.1"),
    ]);
    request.info("Something happened on that request");

    let _ = logger.flush();
}

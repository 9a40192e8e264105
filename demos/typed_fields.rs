//! Typed field constructors over the buffered writer
//!
//! Records carry text, integer, and duration fields; a derived handle
//! stamps its bound fields onto everything it emits. The explicit flush
//! drains the writer queue before exit.
//!
//! Run with: cargo run --example typed_fields

use std::time::Duration;
use unilog::prelude::*;

fn main() {
    let logger = Logger::builder()
        .format(OutputFormat::Json)
        .writer(std::io::stdout())
        .buffered()
        .build();

    logger.error_with_fields(
        "Failed to send event",
        &[
            Field::text("request_id", "127.0.0.1"),
            Field::text("user_ip", "43.256.56.1"),
            Field::int("index", 10),
            Field::duration("request_time", Duration::from_secs(1)),
        ],
    );

    let metrics = logger.with_fields([Field::int("counter", 1), Field::text("name", "m2")]);
    metrics.info("tracked some metrics");

    let timed = logger
        .build_record(Severity::Info)
        .message("tracked some metrics")
        .field("counter", 1)
        .field("name", "m1");
    timed.log();

    let _ = logger.flush();
}

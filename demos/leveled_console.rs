//! Leveled console logging
//!
//! Human-readable records on stderr with a severity floor, ending with a
//! fatal record that flushes and exits the process with a non-zero status.
//!
//! Run with: cargo run --example leveled_console

use unilog::prelude::*;

fn main() {
    let logger = Logger::builder()
        .min_level(Severity::Info)
        .color(true)
        .writer(std::io::stderr())
        .build();

    logger.info("This is an info message");
    unilog::info!(logger, "This is an info message: {}", 12345);

    logger.warn("This is a warning message");
    unilog::warn!(logger, "This is a warning message: {}", 12345);

    logger.error("This is an error message");
    unilog::error!(logger, "This is an error message: {}", 12345);

    // Flushes pending output, then terminates with status 1.
    logger.fatal("This is a fatal error");
}

//! File logging example
//!
//! Demonstrates logging to stderr and a JSON lines file simultaneously, each
//! output with its own threshold.
//!
//! Run with: cargo run --example file_logging

use rust_structured_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - File Logging Example ===\n");

    let mut logger = Logger::builder("file_logging")
        .output(StreamOutput::stderr(Severity::Warning))
        .output(StreamOutput::file(Severity::Debug, "application.jsonl")?)
        .time_format(TimeFormat::Iso8601)
        .static_field("host", "localhost")
        .build()?;

    println!("1. Logging to stderr (warning and above) and file (everything):");

    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.warning("Using default settings for some options")?;
    logger
        .add_string("plugin", "thumbnailer")
        .error("Failed to load optional plugin")?;

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        logger.add_integer("item", i).add_integer("of", 5);
        if i == 3 {
            logger.warning("Item took longer than expected")?;
        } else {
            logger.info("Processing item")?;
        }
    }

    println!("\n3. Recording an error:");
    if let Err(err) = std::fs::read_to_string("missing-settings.json") {
        logger.add_exception("exception", &err).error("Settings unavailable")?;
    }

    logger.info("All operations completed")?;
    logger.close()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.jsonl' for the full log output");

    Ok(())
}

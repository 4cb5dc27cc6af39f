//! Basic logger usage example
//!
//! Demonstrates logging JSON lines to stdout at every severity, with static
//! and dynamic fields and message interpolation.
//!
//! Run with: cargo run --example basic_usage

use rust_structured_logger::prelude::*;
use rust_structured_logger::{fields, info};

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - Basic Usage Example ===\n");

    let mut logger = Logger::builder("basic")
        .output(StreamOutput::stdout(Severity::Debug))
        .timezone("UTC")
        .static_field("app", "basic_usage")
        .build()?;

    println!("1. Logging at every severity:");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.notice("This is a notice message")?;
    logger.warning("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.critical("This is a critical message")?;
    logger.emergency("This is an emergency message")?;
    logger.alert("This is an alert message")?;

    println!("\n2. Dynamic fields (sent with the next line only):");
    logger
        .add_string("user", "ada")
        .add_integer("attempt", 3)
        .add_boolean("mfa", true)
        .info("login succeeded")?;
    logger.info("no dynamic fields here")?;

    println!("\n3. Interpolation and ISO 8601 timestamps:");
    logger.set_time_format_iso8601();
    logger.log_with_context(
        "notice",
        "{user} uploaded {count} files",
        &fields! { "user" => "grace", "count" => 12 },
    )?;
    info!(logger, "formatted with {} arguments", 2)?;

    println!("\n4. Raising the output threshold to warning:");
    if let Some(output) = logger.output_mut(0) {
        output.set_level("warning")?;
    }
    logger.info("Info message (hidden)")?;
    logger.warning("Warning message (visible)")?;

    logger.close()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}

//! Configuration-driven logger example
//!
//! Builds a logger from a JSON document instead of code.
//!
//! Run with: cargo run --example config_logging

use rust_structured_logger::prelude::*;

const CONFIG: &str = r#"{
    "name": "configured",
    "timezone": "Europe/Budapest",
    "time_format": "iso8601",
    "static_fields": { "service": "orders", "region": "eu-central" },
    "outputs": [
        { "kind": "stdout", "level": "info" },
        { "kind": "stderr", "level": "critical" }
    ]
}"#;

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - Configuration Example ===\n");

    let mut logger = LoggerConfig::from_json(CONFIG)?.build()?;

    logger.debug("Not shown: below every threshold")?;
    logger.info("Shown on stdout")?;
    logger.critical("Shown on stdout and stderr")?;

    let metrics = logger.metrics();
    println!(
        "\nlines={} delivered={} skipped={}",
        metrics.lines_logged(),
        metrics.delivered(),
        metrics.skipped()
    );

    logger.close()?;
    Ok(())
}

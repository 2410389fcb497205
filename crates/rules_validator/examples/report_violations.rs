//! Example: Validating a feed-source registration
//!
//! This example demonstrates evaluating a rule batch against user input
//! and reporting the aggregated per-parameter violations.
//!
//! To run this example:
//! ```bash
//! cargo run --example report_violations
//! ```

use anyhow::Result;
use rules_core::RuleSetBuilder;
use rules_validator::{RuleValidator, ValidationError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    // Deliberately broken input so the run shows an aggregated failure.
    let name = "";
    let url = "example.org/feed";

    let rules = RuleSetBuilder::new()
        .rule("Name", name.is_empty(), "Text is required")
        .rule("Name", name.len() > 255, "Text exceeds 255 characters")
        .rule("Url", url.is_empty(), "Url is required")
        .rule(
            "Url",
            !url.starts_with("http://") && !url.starts_with("https://"),
            "Url must start with http:// or https://",
        )
        .build();

    let validator = RuleValidator::new();
    match validator.validate("Source is invalid, fix the errors and try again.", &rules) {
        Ok(()) => println!("Source accepted"),
        Err(ValidationError::Failed(failure)) => {
            // Recording the aggregated error is the caller's job.
            tracing::error!("{}", failure.describe());

            println!("{}", failure.message());
            for (parameter, messages) in failure.violations() {
                println!("  {}: {}", parameter, messages.join("; "));
            }
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}

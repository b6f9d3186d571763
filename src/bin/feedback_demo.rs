//! Feedback SDK Demo
//!
//! Submits one feedback record against a live backend.
//!
//! Usage:
//!   cargo run --bin feedback_demo -- <good|normal|bad> [comment]
//!
//! Environment:
//!   FEEDBACK_SERVICE_ID - Service ID issued by the organization
//!   FEEDBACK_DSN        - Base URL for the API endpoints
//!   RUST_LOG            - Log level (default: info)

use eyre::{eyre, Result};
use feedback_sdk::{FeedbackSdk, Rating, SdkConfig, SubmitError};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let config = match SdkConfig::from_env() {
        Some(config) => config,
        None => {
            eprintln!("FEEDBACK_SERVICE_ID / FEEDBACK_DSN not set!");
            eprintln!("   Example:");
            eprintln!("   export FEEDBACK_SERVICE_ID=svc-demo");
            eprintln!("   export FEEDBACK_DSN=https://feedback.example.com/api");
            return Err(eyre!("missing configuration"));
        }
    };

    let mut args = std::env::args().skip(1);
    let rating = args
        .next()
        .and_then(|r| Rating::parse(&r))
        .ok_or_else(|| eyre!("usage: feedback_demo <good|normal|bad> [comment]"))?;
    let comment = args.next();

    let mut sdk = FeedbackSdk::new();
    sdk.init(config)?;

    let mut record = serde_json::json!({ "feedbackRating": rating.as_str() });
    if let Some(comment) = comment {
        record["feedbackComment"] = serde_json::Value::String(comment);
    }

    match sdk.submit(&record).await {
        Ok(body) => {
            info!("feedback accepted");
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(SubmitError::Sdk(err)) => {
            eprintln!("submission failed: {}", err);
            Err(eyre!("submission failed with code {}", err.code_str()))
        }
        Err(SubmitError::Usage(err)) => Err(eyre!(err.message)),
    }
}

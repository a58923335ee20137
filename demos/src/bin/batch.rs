//! Batched calls.
//!
//! Registers several calls, sends them in one request and prints each
//! outcome. A call the service rejects shows up as a failure in its own
//! slot without affecting the others.
//!
//! # Running
//!
//! ```bash
//! export GETRESPONSE_API_KEY="your-api-key"
//! cargo run -p getresponse-demos --bin batch
//! ```

use std::env;

use getresponse::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = env::var("GETRESPONSE_API_KEY").expect("GETRESPONSE_API_KEY must be set");
    let client = Client::builder().api_key(api_key).build_batched()?;

    client.batch();
    let calls = [
        ("ping", client.ping()?),
        ("get_account_info", client.get_account_info()?),
        ("get_campaigns", client.get_campaigns(None)?),
        // Unknown ID: expected to fail on its own
        ("get_campaign", client.get_campaign("no-such-campaign")?),
    ];
    info!(calls = calls.len(), "sending batch");

    let Some(outcomes) = client.send()? else {
        eprintln!(
            "batch failed: {}",
            client.error().unwrap_or_else(|| "unknown error".into())
        );
        std::process::exit(1);
    };

    for (name, slot) in calls {
        match &outcomes[slot.position()] {
            Outcome::Success(result) => println!("{name}: {result}"),
            Outcome::Failure(fault) => println!("{name} failed: {}", fault.message()),
        }
    }

    Ok(())
}

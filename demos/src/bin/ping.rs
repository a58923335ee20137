//! Connectivity check.
//!
//! Sends `ping`, then lists the campaigns of the account.
//!
//! # Running
//!
//! ```bash
//! export GETRESPONSE_API_KEY="your-api-key"
//! # Optional, defaults to http://api2.getresponse.com
//! export GETRESPONSE_URL="https://api2.getresponse.com"
//!
//! RUST_LOG=getresponse=debug cargo run -p getresponse-demos --bin ping
//! ```

use std::env;

use getresponse::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = env::var("GETRESPONSE_API_KEY").expect("GETRESPONSE_API_KEY must be set");
    let endpoint =
        env::var("GETRESPONSE_URL").unwrap_or_else(|_| getresponse::DEFAULT_ENDPOINT.to_string());

    let client = Client::builder()
        .api_key(api_key)
        .endpoint(endpoint)
        .build()?;

    println!("ping: {}", client.ping()?);

    let campaigns = client.get_campaigns(None)?;
    match campaigns.as_object() {
        Some(campaigns) => {
            for (id, campaign) in campaigns {
                println!("{id}: {}", campaign["name"]);
            }
        }
        None => println!("campaigns: {campaigns}"),
    }

    Ok(())
}

//! Testing utilities for code built on the GetResponse client.
//!
//! [`MockWire`] stands in for the HTTP exchange. Plug it into a client with
//! [`ClientBuilder::wire`](crate::ClientBuilder::wire) to unit-test code that
//! calls the API, without a network and without a mock HTTP server:
//!
//! ```rust
//! use std::sync::Arc;
//! use getresponse::Client;
//! use getresponse::testing::MockWire;
//! use serde_json::json;
//!
//! let wire = Arc::new(MockWire::new());
//! wire.reply_json(200, json!({"result": {"CAMPAIGN_ID": {"name": "news"}}}));
//!
//! let client = Client::builder().api_key("key").wire(wire.clone()).build()?;
//! let campaigns = client.get_campaigns(None)?;
//! assert!(campaigns.get("CAMPAIGN_ID").is_some());
//! # Ok::<(), getresponse::Error>(())
//! ```

mod mock_wire;

pub use mock_wire::MockWire;

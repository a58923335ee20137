//! Authentication for the GetResponse API.
//!
//! GetResponse API v2 authenticates every call with the account API key,
//! passed as the first positional parameter of the JSON-RPC request. There is
//! no token exchange and no header-based auth.
//!
//! ```rust,no_run
//! use getresponse::Client;
//!
//! let client = Client::builder()
//!     .api_key("your-api-key")
//!     .build()?;
//! # Ok::<(), getresponse::Error>(())
//! ```

mod api_key;

pub use api_key::ApiKey;

//! # Courier Configuration
//!
//! Typed settings for the courier JSON-RPC client: HTTP headers and user
//! agent, transport timeouts, and how responses are routed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courier_config::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::load_from_file("courier.toml").await?;
//!     println!("request timeout: {:?}", config.timeouts.request_timeout());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod loader;

pub use config::*;
pub use loader::*;

pub use courier_protocol::DispatchMode;

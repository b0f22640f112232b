//! # Bitget UTA Rust SDK
//!
//! An async Rust client for the Bitget Unified Trading Account (v3) REST API.
//!
//! ## Features
//!
//! - **Request Signing**: HMAC-SHA256 authentication headers for private endpoints
//! - **Typed Services**: One request type per endpoint, validated before any I/O
//! - **Envelope Decoding**: Transport, decoding and application errors kept apart
//! - **Demo Trading**: Optional `paptrading` marker on every request
//! - **Pluggable Transport**: `reqwest` by default, any [`api::Transport`] for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitget_uta_sdk::services::{GetTickers, PlaceOrder};
//! use bitget_uta_sdk::{ApiClient, Category, Config, Side};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new(
//!         "your_api_key",     // API key
//!         "your_secret_key",  // secret key
//!         "your_passphrase",  // passphrase
//!     )?
//!     .with_demo_trading(true);
//!
//!     let client = ApiClient::new(config)?;
//!
//!     // Get market data
//!     let tickers = client
//!         .execute(&GetTickers::new().category(Category::Spot).symbol("BTCUSDT"))
//!         .await?;
//!     println!("Tickers: {}", tickers.len());
//!
//!     // Place an order
//!     let order = PlaceOrder::limit(Category::Spot, "BTCUSDT", Side::Buy, "0.001", "20000")
//!         .with_generated_client_oid();
//!     let ack = client.execute(&order).await?;
//!
//!     println!("Order placed: {}", ack.order_id);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod error;
pub mod services;
pub mod signer;
pub mod types;

// Re-exports for convenience
pub use api::ApiClient;
pub use error::{BitgetError, ErrorKind, Result};
pub use services::Endpoint;
pub use signer::{BitgetSigner, Config, Credentials};
pub use types::*;

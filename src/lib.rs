//! # Zoop API SDK for Rust
//!
//! A client library for the Zoop payment-processing REST API: buyers,
//! transactions, boletos, card and bank account tokens, transfers, and
//! split rules.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zoop_api::{ApiKey, MarketplaceId, ZoopClient, ZoopConfig};
//! use zoop_api::rest::resources::Buyer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ZoopConfig::builder()
//!         .api_key(ApiKey::new("zpk_test_abc")?)
//!         .marketplace_id(MarketplaceId::new("mkt_123")?)
//!         .build()?;
//!     let client = ZoopClient::new(&config);
//!
//!     let buyer = Buyer::new()
//!         .first_name("Ana")
//!         .email("ana@example.com")
//!         .create(&client)
//!         .await?;
//!     println!("created buyer {:?}", buyer.id());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every API call returns a [`Result`] whose error is [`ApiError`], with
//! exactly three variants to match on: [`ApiError::Unauthorized`] for
//! rejected credentials, [`ApiError::Validation`] carrying the decoded
//! error detail for 4xx responses, and [`ApiError::Unexpected`] for
//! everything else.
//!
//! ```rust,no_run
//! use zoop_api::{ApiError, ZoopClient};
//! use zoop_api::rest::resources::Buyer;
//!
//! # async fn example(client: &ZoopClient) {
//! match Buyer::find(client, "buy_missing").await {
//!     Ok(buyer) => println!("found {:?}", buyer.id()),
//!     Err(ApiError::Unauthorized) => eprintln!("check the API key"),
//!     Err(ApiError::Validation { status, error }) => {
//!         eprintln!("rejected with {status}: {error}");
//!     }
//!     Err(ApiError::Unexpected { .. }) => eprintln!("try again later"),
//! }
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use clients::{ApiError, ErrorDetail, HttpClient, ZoopClient};
pub use config::{ApiKey, ApiVersion, MarketplaceId, ZoopConfig, ZoopConfigBuilder};
pub use error::ConfigError;
pub use rest::{ApiResource, DataBag, Filters, Links, Pagination};

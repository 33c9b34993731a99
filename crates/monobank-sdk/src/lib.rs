//! Monobank SDK - client for the Monobank open API
//!
//! The SDK covers the personal API (client info, statements, currency
//! rates, webhook registration) and the merchant acquiring API (invoice
//! creation and status).
//!
//! # Quick Start
//!
//! ```ignore
//! use monobank_sdk::Monobank;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bank = Monobank::new(std::env::var("MONOBANK_TOKEN")?)?;
//!
//!     let user = bank.get_user_info().await?;
//!     println!("{} has {} accounts", user.name, user.accounts.len());
//!
//!     let from = chrono::Utc::now() - chrono::Duration::days(7);
//!     let statement = bank
//!         .get_statement(&user.accounts[0].id, from, chrono::Utc::now())
//!         .await?;
//!     for item in statement {
//!         println!("{}: {} ({})", item.time, item.description, item.amount);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design
//!
//! - One async method per remote operation; no retries, no caching, exactly
//!   one request per call.
//! - Validation failures (`InvalidArgument`, `InvalidPeriod`, `RateLimited`)
//!   are raised before any network call.
//! - Every failure is a distinct [`MonobankError`] variant with enough
//!   structure to branch on without string parsing.
//! - The HTTP layer sits behind the [`Transport`] trait; tests inject mock
//!   transports, production uses [`ReqwestTransport`].

pub mod client;
pub mod error;
pub mod transport;

pub use client::Monobank;
pub use error::{MonobankError, Result};
pub use transport::{Method, Request, Response, ReqwestTransport, Transport};

pub use monobank_types::*;

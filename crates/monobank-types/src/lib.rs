//! Monobank Types - Wire-format types for the Monobank open API
//!
//! This crate contains the request and response bodies exchanged with the
//! API, with zero dependencies on other monobank crates. It covers:
//!
//! - Client information (accounts, jars, capability flags)
//! - Currency exchange rates
//! - Account statements
//! - Merchant invoicing (creation, status)
//! - Webhook registration
//!
//! # Wire format
//!
//! Field names on the wire are lowerCamelCase exactly as the API documents
//! them (`currencyCode`, `webHookUrl`, `merchantPaymInfo`, ...). The names
//! are part of the compatibility contract and must never drift, so every
//! struct pins them with serde attributes.
//!
//! All monetary fields are integer minor units (kopecks, cents); the API
//! never transmits fractional amounts.

pub mod account;
pub mod currency;
pub mod error;
pub mod invoice;
pub mod jar;
pub mod statement;
pub mod user;
pub mod webhook;

pub use account::*;
pub use currency::*;
pub use error::*;
pub use invoice::*;
pub use jar::*;
pub use statement::*;
pub use user::*;
pub use webhook::*;

//! Typed Rust client for the VoodooSMS HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks (integer-or-text result codes, fields that vanish
//! when empty), and a small blocking client layer orchestrating requests.
//!
//! ```rust,no_run
//! use voodoosms::{Credentials, GatewayClient};
//!
//! fn main() -> Result<(), voodoosms::GatewayError> {
//!     let client = GatewayClient::new(Credentials::new("user", "secret")?);
//!     let reference_id = client.send_sms("SENDERID", "447123456789", "hello")?;
//!     let status = client.get_dlr_status(reference_id)?;
//!     println!("{status}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credentials, GatewayClient, GatewayClientBuilder, GatewayError, HttpResponse, HttpTransport,
};
pub use domain::{
    DateBound, Destination, KnownResultCode, Message, Method, Originator, Password, PhoneNumber,
    ResultCode, Username, ValidationError,
};

//! Remote dial service client.
//!
//! [`RemoteDialService`] implements the same
//! [`DialService`](dials_core::DialService) capability as the embedded
//! store, but over HTTP — callers swap backends without noticing. Each
//! operation is one request/response round trip against the wire contract
//! defined in `dials-proto`.
//!
//! Error mapping inspects the response body's error string first and maps it
//! back to the shared taxonomy via the string-keyed lookup; status codes
//! only select log severity. Transport failures — unreachable server,
//! timeouts, undecodable bodies — surface as
//! [`DialError::Internal`](dials_core::DialError::Internal). No retry or
//! timeout policy is layered on top of the HTTP client's defaults.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;

pub use client::RemoteDialService;
pub use reqwest::Url;

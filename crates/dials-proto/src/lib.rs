//! HTTP wire contract for the dials API.
//!
//! Envelope types shared verbatim by the server endpoint and the remote
//! client, so both sides of the wire agree on one definition:
//!
//! ```text
//! GET   /api/dials/{id}   → GetDialResponse
//! POST  /api/dials        ← PostDialRequest   → PostDialResponse
//! PATCH /api/dials/{id}   ← PatchDialRequest  → PatchDialResponse
//! ```
//!
//! Every optional field is both `skip_serializing_if` and `default`, so an
//! omitted field and an absent field are the same thing on both ends. Error
//! strings in `err` fields are the canonical `DialError` wire messages; see
//! [`dials_core::DialError::from_wire_message`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod payloads;

pub use payloads::{
    ErrorResponse, GetDialResponse, PatchDialRequest, PatchDialResponse, PostDialRequest,
    PostDialResponse,
};

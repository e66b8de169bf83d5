//! Dials HTTP API server.
//!
//! Exposes any [`DialService`](dials_core::DialService) — normally the
//! embedded store — over the three dial routes:
//!
//! ```text
//! GET   /api/dials/{id}    fetch one dial
//! POST  /api/dials         create a dial
//! PATCH /api/dials/{id}    update a dial's level
//! ```
//!
//! ## Architecture
//!
//! ```text
//! dials-server
//!   ├─ router        (axum routes over Arc<dyn DialService>)
//!   ├─ handlers      (wire envelopes ↔ service calls, status mapping)
//!   └─ main          (clap args, tracing setup, store lifecycle)
//! ```
//!
//! Error bodies carry the taxonomy's wire strings; internal failures are
//! logged server-side and replaced with a generic message before anything
//! reaches the client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod handler;

pub use handler::router;

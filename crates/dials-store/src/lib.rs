//! Embedded dial store.
//!
//! This crate implements the [`DialService`](dials_core::DialService)
//! capability against redb, an embedded transactional key-value engine.
//! Records live in a single `dials` table keyed by raw identifier bytes;
//! every operation is one transaction, so a failure at any step aborts with
//! prior state untouched.
//!
//! ## Architecture
//!
//! ```text
//! dials-store
//!   ├─ record      (fixed binary codec for persisted dials)
//!   └─ DialStore   (redb transactions + authorization check)
//! ```
//!
//! The store owns its database handle outright — it is constructed
//! explicitly with [`DialStore::open`] and closed by dropping it. The time
//! source is injected as a [`Clock`](dials_core::Clock) so tests control
//! every stored timestamp.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod record;
mod store;

pub use store::DialStore;

//! Core types for the dials stack.
//!
//! A dial is a named numeric level owned by a user, loosely protected by a
//! caller-assigned secret token. This crate defines the domain types, the
//! [`DialService`] capability that every backend implements, the error
//! taxonomy shared across process boundaries, and the injectable [`Clock`]
//! used to stamp modification times deterministically under test.
//!
//! ## Architecture
//!
//! ```text
//! dials-core
//!   ├─ Dial / DialId      (domain entity)
//!   ├─ DialService        (capability trait: get / create / set level)
//!   ├─ DialError          (taxonomy + wire-string mapping)
//!   ├─ Clock              (injectable time source)
//!   └─ Authenticator      (optional per-user session collaborator)
//! ```
//!
//! Backends live in sibling crates: `dials-store` (embedded redb store) and
//! `dials-client` (remote HTTP). Callers hold an `Arc<dyn DialService>` and
//! are agnostic to locality.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod clock;
mod dial;
mod error;
mod service;

pub use auth::{AuthError, Authenticator, User};
pub use clock::{Clock, SystemClock};
pub use dial::{Dial, DialId};
pub use error::{DialError, INTERNAL_MESSAGE};
pub use service::DialService;

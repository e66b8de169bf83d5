//! Request and response envelopes for the dial routes.
//!
//! The dial inside an envelope serializes with its token stripped (the
//! entity's own serde contract); the create request carries the token as a
//! sibling field instead, so the secret travels exactly once, inward.

use dials_core::{Dial, DialId};
use serde::{Deserialize, Serialize};

/// Response to `GET /api/dials/{id}`.
///
/// Exactly one of `dial` and `err` is set on a well-formed response. An
/// absent dial is a 404 with an empty object body, not an `err` string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetDialResponse {
    /// The requested dial, if found.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dial: Option<Dial>,
    /// Error message, if the lookup failed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub err: Option<String>,
}

/// Request body for `POST /api/dials`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDialRequest {
    /// The dial to create. A missing field maps to the "dial required"
    /// error rather than a JSON decode failure.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dial: Option<Dial>,
    /// Secret that will authorize future level updates on this dial.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub token: String,
}

/// Response to `POST /api/dials`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDialResponse {
    /// The persisted dial, including the server-assigned modification time.
    /// Its token is never echoed back.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dial: Option<Dial>,
    /// Error message, if creation failed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub err: Option<String>,
}

/// Request body for `PATCH /api/dials/{id}`.
///
/// The body's `id` is authoritative; the path segment exists for routing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchDialRequest {
    /// Identifier of the dial to update.
    #[serde(default)]
    pub id: DialId,
    /// Token assigned at creation.
    #[serde(default)]
    pub token: String,
    /// New level.
    #[serde(default)]
    pub level: f64,
}

/// Response to `PATCH /api/dials/{id}`.
///
/// Success is an empty object; failure carries the error string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchDialResponse {
    /// Error message, if the update failed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub err: Option<String>,
}

/// Generic error body used wherever a route fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The wire error message.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub err: String,
}

//! The dial entity and its identifier.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dial identifier.
///
/// Caller-assigned, unique within the store, and immutable after creation.
/// An empty identifier is rejected at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialId(String);

impl DialId {
    /// Create an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the identifier is empty (invalid for creation).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DialId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DialId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An adjustable level associated with a user.
///
/// The caller-assigned `token` loosely authenticates level updates: it is set
/// at creation, immutable thereafter, and must match on every
/// [`set_level`](crate::DialService::set_level) call.
///
/// # Security
///
/// - **Serialization**: `token` is never written to JSON output
///   (`#[serde(skip)]`), so no endpoint response can leak it.
/// - **Debug Redaction**: The `Debug` impl redacts `token` to prevent
///   accidental logging of credentials.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Dial {
    /// Unique identifier, assigned by the creator.
    #[serde(rename = "dialID", default)]
    pub id: DialId,

    /// Secret shared with the creator; authorizes level updates.
    #[serde(skip)]
    pub token: String,

    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Current level.
    #[serde(default)]
    pub level: f64,

    /// Time of the most recent successful write, assigned by the store.
    #[serde(rename = "modTime", default = "unix_epoch")]
    pub mod_time: DateTime<Utc>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

impl fmt::Debug for Dial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dial")
            .field("id", &self.id)
            .field("token", &format!("<redacted {} bytes>", self.token.len()))
            .field("name", &self.name)
            .field("level", &self.level)
            .field("mod_time", &self.mod_time)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dial {
        Dial {
            id: DialId::new("XXX"),
            token: "TOKEN".to_string(),
            name: Some("NAME".to_string()),
            level: 100.0,
            mod_time: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn token_never_serialized() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("TOKEN"));
        assert!(!json.contains("token"));
    }

    #[test]
    fn json_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["dialID"], "XXX");
        assert_eq!(value["name"], "NAME");
        assert_eq!(value["level"], 100.0);
        assert!(value.get("modTime").is_some());
    }

    #[test]
    fn name_omitted_when_absent() {
        let dial = Dial { name: None, ..sample() };
        let value = serde_json::to_value(dial).unwrap();
        assert!(value.get("name").is_none());
    }

    #[test]
    fn missing_fields_default_on_decode() {
        let dial: Dial = serde_json::from_str("{}").unwrap();
        assert!(dial.id.is_empty());
        assert!(dial.token.is_empty());
        assert_eq!(dial.name, None);
        assert_eq!(dial.level, 0.0);
        assert_eq!(dial.mod_time, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn debug_redacts_token() {
        let out = format!("{:?}", sample());
        assert!(!out.contains("TOKEN"));
        assert!(out.contains("redacted"));
    }

    #[test]
    fn dial_id_display_roundtrip() {
        let id = DialId::from("dial-1");
        assert_eq!(id.to_string(), "dial-1");
        assert_eq!(id.as_str(), "dial-1");
        assert!(!id.is_empty());
        assert!(DialId::default().is_empty());
    }
}

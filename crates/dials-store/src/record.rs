//! Binary codec for persisted dial records.
//!
//! A dial is stored as a bincode-encoded [`DialRecord`], a flat struct kept
//! separate from the domain type so the storage layout is an explicit
//! contract rather than whatever the entity happens to derive. The layout
//! carries no version field — changing the record shape is a breaking change
//! to stored data.

use chrono::DateTime;
use dials_core::{Dial, DialError, DialId};
use serde::{Deserialize, Serialize};

/// The persisted shape of a dial.
///
/// Timestamps are stored as i64 nanoseconds since the Unix epoch, UTC, which
/// round-trips `chrono`'s full nanosecond precision.
#[derive(Debug, Serialize, Deserialize)]
struct DialRecord {
    id: String,
    token: String,
    name: Option<String>,
    level: f64,
    mod_time_ns: i64,
}

/// Encode a dial into its fixed binary record layout.
///
/// # Errors
///
/// Returns [`DialError::CorruptRecord`] if the modification time falls
/// outside the representable nanosecond range, and [`DialError::Internal`]
/// if serialization itself fails.
pub fn encode_dial(dial: &Dial) -> Result<Vec<u8>, DialError> {
    let mod_time_ns = dial
        .mod_time
        .timestamp_nanos_opt()
        .ok_or_else(|| DialError::corrupt("mod time outside nanosecond range"))?;

    let record = DialRecord {
        id: dial.id.as_str().to_string(),
        token: dial.token.clone(),
        name: dial.name.clone(),
        level: dial.level,
        mod_time_ns,
    };

    bincode::serialize(&record).map_err(DialError::internal)
}

/// Decode a dial from its binary record layout.
///
/// # Errors
///
/// Returns [`DialError::CorruptRecord`] if the bytes cannot be parsed as a
/// record.
pub fn decode_dial(bytes: &[u8]) -> Result<Dial, DialError> {
    let record: DialRecord = bincode::deserialize(bytes).map_err(DialError::corrupt)?;

    Ok(Dial {
        id: DialId::new(record.id),
        token: record.token,
        name: record.name,
        level: record.level,
        mod_time: DateTime::from_timestamp_nanos(record.mod_time_ns),
    })
}

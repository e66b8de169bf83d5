//! Dial store integration tests.
//!
//! Each test opens a fresh database in a temporary directory and injects a
//! fixed clock, so stored modification times are asserted exactly.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use dials_core::{Clock, Dial, DialError, DialId, DialService};
use dials_store::DialStore;

/// Clock frozen at a known instant.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
}

fn open_store(dir: &tempfile::TempDir) -> DialStore {
    let clock = Arc::new(FixedClock(frozen_now()));
    DialStore::open(dir.path().join("dials.redb"), clock).unwrap()
}

fn sample_dial() -> Dial {
    Dial {
        id: DialId::new("XXX"),
        token: "TOKEN".to_string(),
        name: Some("MY DIAL".to_string()),
        level: 50.0,
        mod_time: DateTime::UNIX_EPOCH,
    }
}

#[tokio::test]
async fn create_then_read_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let created = store.create_dial(sample_dial()).await.unwrap();

    // The store assigns the modification time and preserves the token.
    assert_eq!(created.mod_time, frozen_now());
    assert_eq!(created.token, "TOKEN");

    let read = store.dial(&DialId::new("XXX")).await.unwrap().unwrap();
    assert_eq!(read, created);
}

#[tokio::test]
async fn missing_dial_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    assert_eq!(store.dial(&DialId::new("NO_SUCH_DIAL")).await.unwrap(), None);
}

#[tokio::test]
async fn duplicate_create_leaves_first_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.create_dial(sample_dial()).await.unwrap();

    let second = Dial { level: 99.0, token: "OTHER".to_string(), ..sample_dial() };
    let err = store.create_dial(second).await.unwrap_err();
    assert_eq!(err, DialError::DialExists);

    let read = store.dial(&DialId::new("XXX")).await.unwrap().unwrap();
    assert_eq!(read.level, 50.0);
    assert_eq!(read.token, "TOKEN");
}

#[tokio::test]
async fn empty_id_is_rejected_without_write() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let dial = Dial { id: DialId::default(), ..sample_dial() };
    let err = store.create_dial(dial).await.unwrap_err();
    assert_eq!(err, DialError::DialIdRequired);

    assert_eq!(store.dial(&DialId::new("")).await.unwrap(), None);
}

#[tokio::test]
async fn matching_token_updates_level() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.create_dial(sample_dial()).await.unwrap();
    store.set_level(&DialId::new("XXX"), "TOKEN", 60.0).await.unwrap();

    let read = store.dial(&DialId::new("XXX")).await.unwrap().unwrap();
    assert_eq!(read.level, 60.0);
    assert_eq!(read.mod_time, frozen_now());
}

#[tokio::test]
async fn wrong_token_leaves_record_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let created = store.create_dial(sample_dial()).await.unwrap();

    let err = store.set_level(&DialId::new("XXX"), "WRONG", 60.0).await.unwrap_err();
    assert_eq!(err, DialError::Unauthorized);

    // No partial mutation: level and modification time both unchanged.
    let read = store.dial(&DialId::new("XXX")).await.unwrap().unwrap();
    assert_eq!(read, created);
}

#[tokio::test]
async fn set_level_on_missing_dial_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let err = store.set_level(&DialId::new("NOPE"), "", 1.0).await.unwrap_err();
    assert_eq!(err, DialError::DialNotFound);
}

#[tokio::test]
async fn dials_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.create_dial(sample_dial()).await.unwrap();
    store
        .create_dial(Dial { id: DialId::new("YYY"), level: 80.0, ..sample_dial() })
        .await
        .unwrap();

    store.set_level(&DialId::new("YYY"), "TOKEN", 10.0).await.unwrap();

    assert_eq!(store.dial(&DialId::new("XXX")).await.unwrap().unwrap().level, 50.0);
    assert_eq!(store.dial(&DialId::new("YYY")).await.unwrap().unwrap().level, 10.0);
}

#[tokio::test]
async fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = open_store(&dir);
        store.create_dial(sample_dial()).await.unwrap();
        // Store dropped here; the database closes and releases its lock.
    }

    let store = open_store(&dir);
    let read = store.dial(&DialId::new("XXX")).await.unwrap().unwrap();
    assert_eq!(read.level, 50.0);
    assert_eq!(read.token, "TOKEN");
}

#[tokio::test]
async fn open_is_idempotent_on_existing_database() {
    let dir = tempfile::tempdir().unwrap();

    {
        open_store(&dir);
    }
    // Re-opening re-runs table creation against an existing file.
    let store = open_store(&dir);
    assert_eq!(store.dial(&DialId::new("XXX")).await.unwrap(), None);
}

//! redb-backed implementation of the dial service.

use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use dials_core::{Clock, Dial, DialError, DialId, DialService};
use redb::{Database, ReadableTable, TableDefinition};

use crate::record::{decode_dial, encode_dial};

/// Table holding all dial records, keyed by raw identifier bytes.
const DIALS: TableDefinition<&str, &[u8]> = TableDefinition::new("dials");

/// Embedded dial store.
///
/// Owns the database handle outright; dropping the store closes the
/// database. redb holds a file lock while the database is open, so a second
/// process opening the same path fails fast instead of corrupting state.
///
/// Concurrency is delegated to redb's transaction isolation: read
/// transactions see a committed snapshot, and a second writer blocks until
/// the current write transaction commits or aborts.
pub struct DialStore {
    db: Database,
    clock: Arc<dyn Clock>,
}

impl DialStore {
    /// Open (creating if necessary) the database at `path` and ensure the
    /// dials table exists.
    ///
    /// Table creation runs in its own committed write transaction, so it is
    /// idempotent across restarts and later read transactions never observe
    /// a missing table.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::Internal`] if the database cannot be opened
    /// (including when another process holds its file lock) or the initial
    /// transaction fails.
    pub fn open(path: impl AsRef<Path>, clock: Arc<dyn Clock>) -> Result<Self, DialError> {
        let db = Database::create(path).map_err(DialError::internal)?;

        let tx = db.begin_write().map_err(DialError::internal)?;
        tx.open_table(DIALS).map_err(DialError::internal)?;
        tx.commit().map_err(DialError::internal)?;

        Ok(Self { db, clock })
    }

    fn read_dial(&self, id: &DialId) -> Result<Option<Dial>, DialError> {
        let tx = self.db.begin_read().map_err(DialError::internal)?;
        let table = tx.open_table(DIALS).map_err(DialError::internal)?;

        match table.get(id.as_str()).map_err(DialError::internal)? {
            Some(guard) => decode_dial(guard.value()).map(Some),
            None => Ok(None),
        }
    }

    fn insert_dial(&self, mut dial: Dial) -> Result<Dial, DialError> {
        let tx = self.db.begin_write().map_err(DialError::internal)?;
        {
            let mut table = tx.open_table(DIALS).map_err(DialError::internal)?;

            // Existence check first: a duplicate create aborts before any
            // write reaches the table.
            if table.get(dial.id.as_str()).map_err(DialError::internal)?.is_some() {
                return Err(DialError::DialExists);
            }

            dial.mod_time = self.clock.now();

            let encoded = encode_dial(&dial)?;
            table.insert(dial.id.as_str(), encoded.as_slice()).map_err(DialError::internal)?;
        }
        tx.commit().map_err(DialError::internal)?;

        Ok(dial)
    }

    fn update_level(&self, id: &DialId, token: &str, level: f64) -> Result<(), DialError> {
        let tx = self.db.begin_write().map_err(DialError::internal)?;
        {
            let mut table = tx.open_table(DIALS).map_err(DialError::internal)?;

            let Some(guard) = table.get(id.as_str()).map_err(DialError::internal)? else {
                return Err(DialError::DialNotFound);
            };
            let mut dial = decode_dial(guard.value())?;
            drop(guard);

            // Authorization precedes any write: a mismatch aborts the
            // transaction with the record untouched.
            if dial.token != token {
                return Err(DialError::Unauthorized);
            }

            dial.level = level;
            dial.mod_time = self.clock.now();

            let encoded = encode_dial(&dial)?;
            table.insert(id.as_str(), encoded.as_slice()).map_err(DialError::internal)?;
        }
        tx.commit().map_err(DialError::internal)?;

        Ok(())
    }
}

#[async_trait]
impl DialService for DialStore {
    async fn dial(&self, id: &DialId) -> Result<Option<Dial>, DialError> {
        self.read_dial(id)
    }

    async fn create_dial(&self, dial: Dial) -> Result<Dial, DialError> {
        if dial.id.is_empty() {
            return Err(DialError::DialIdRequired);
        }
        self.insert_dial(dial)
    }

    async fn set_level(&self, id: &DialId, token: &str, level: f64) -> Result<(), DialError> {
        self.update_level(id, token, level)
    }
}

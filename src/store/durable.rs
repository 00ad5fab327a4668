//! ACID-durable analysis store backed by redb.
//!
//! Records are bincode-encoded [`StoredAnalysis`] values keyed by a
//! monotonically increasing id. The id counter lives in its own table and
//! is bumped in the same transaction as the insert, so ids are never reused.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};

use super::{HistoryEntry, SentimentDistribution, StoreResult, StoredAnalysis};
use crate::engine::AnalysisResult;
use crate::error::StoreError;

/// Analyses by id.
const ANALYSES_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("analyses");

/// Store counters (currently only `next_id`).
const COUNTERS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("counters");

const NEXT_ID: &str = "next_id";

fn redb_err<E: std::fmt::Display>(context: &'static str) -> impl Fn(E) -> StoreError {
    move |e| StoreError::Redb {
        message: format!("{context} failed: {e}"),
    }
}

/// Persistent history of analyses.
pub struct AnalysisStore {
    db: Arc<Database>,
}

impl AnalysisStore {
    /// Open or create the store in `data_dir`.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        std::fs::create_dir_all(data_dir).map_err(|e| StoreError::Io { source: e })?;
        let db_path = data_dir.join("analyses.redb");
        let db = Database::create(&db_path).map_err(|e| StoreError::Redb {
            message: format!("failed to open redb at {}: {e}", db_path.display()),
        })?;

        // Create both tables up front so read transactions can always open them.
        let txn = db.begin_write().map_err(redb_err("begin_write"))?;
        txn.open_table(ANALYSES_TABLE).map_err(redb_err("open_table"))?;
        txn.open_table(COUNTERS_TABLE).map_err(redb_err("open_table"))?;
        txn.commit().map_err(redb_err("commit"))?;

        tracing::debug!(path = %db_path.display(), "opened analysis store");
        Ok(Self { db: Arc::new(db) })
    }

    /// Persist an analysis and return its new id.
    pub fn save(&self, analysis: &AnalysisResult) -> StoreResult<u64> {
        let txn = self.db.begin_write().map_err(redb_err("begin_write"))?;
        let id = {
            let mut counters = txn.open_table(COUNTERS_TABLE).map_err(redb_err("open_table"))?;
            let id = counters
                .get(NEXT_ID)
                .map_err(redb_err("get"))?
                .map(|guard| guard.value())
                .unwrap_or(1);
            counters
                .insert(NEXT_ID, id + 1)
                .map_err(redb_err("insert"))?;

            let record = StoredAnalysis {
                id,
                stored_at: Utc::now(),
                analysis: analysis.clone(),
            };
            let bytes = bincode::serialize(&record).map_err(|e| StoreError::Serialization {
                message: e.to_string(),
            })?;
            let mut analyses = txn.open_table(ANALYSES_TABLE).map_err(redb_err("open_table"))?;
            analyses
                .insert(id, bytes.as_slice())
                .map_err(redb_err("insert"))?;
            id
        };
        txn.commit().map_err(redb_err("commit"))?;
        tracing::debug!(id, "saved analysis");
        Ok(id)
    }

    /// Look up one analysis.
    pub fn get(&self, id: u64) -> StoreResult<Option<StoredAnalysis>> {
        let txn = self.db.begin_read().map_err(redb_err("begin_read"))?;
        let table = txn.open_table(ANALYSES_TABLE).map_err(redb_err("open_table"))?;
        let guard = table.get(id).map_err(redb_err("get"))?;
        guard.map(|g| decode(g.value())).transpose()
    }

    /// Every analysis, newest first (by analysis timestamp, then id).
    pub fn list_all(&self) -> StoreResult<Vec<StoredAnalysis>> {
        let mut records = self.load_all()?;
        records.sort_by(|a, b| {
            b.analysis
                .timestamp
                .cmp(&a.analysis.timestamp)
                .then(b.id.cmp(&a.id))
        });
        Ok(records)
    }

    /// Delete one analysis. Returns whether it existed.
    pub fn delete_by_id(&self, id: u64) -> StoreResult<bool> {
        let txn = self.db.begin_write().map_err(redb_err("begin_write"))?;
        let existed = {
            let mut table = txn.open_table(ANALYSES_TABLE).map_err(redb_err("open_table"))?;
            let removed = table.remove(id).map_err(redb_err("remove"))?;
            removed.is_some()
        };
        txn.commit().map_err(redb_err("commit"))?;
        Ok(existed)
    }

    /// Delete every analysis and return how many there were.
    ///
    /// The id counter is kept, so later saves never reuse an old id.
    pub fn delete_all(&self) -> StoreResult<usize> {
        let txn = self.db.begin_write().map_err(redb_err("begin_write"))?;
        let count = {
            let mut table = txn.open_table(ANALYSES_TABLE).map_err(redb_err("open_table"))?;
            let mut ids = Vec::new();
            for entry in table.iter().map_err(redb_err("iter"))? {
                let (key, _) = entry.map_err(redb_err("iter"))?;
                ids.push(key.value());
            }
            for id in &ids {
                table.remove(*id).map_err(redb_err("remove"))?;
            }
            ids.len()
        };
        txn.commit().map_err(redb_err("commit"))?;
        tracing::info!(count, "cleared analysis history");
        Ok(count)
    }

    /// Number of stored analyses.
    pub fn len(&self) -> StoreResult<u64> {
        let txn = self.db.begin_read().map_err(redb_err("begin_read"))?;
        let table = txn.open_table(ANALYSES_TABLE).map_err(redb_err("open_table"))?;
        table.len().map_err(redb_err("len"))
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        self.len().map(|n| n == 0)
    }

    /// Count of stored analyses per classification.
    pub fn distribution(&self) -> StoreResult<SentimentDistribution> {
        let mut distribution = SentimentDistribution::default();
        for record in self.load_all()? {
            distribution.record(record.analysis.sentiment.classification);
        }
        Ok(distribution)
    }

    /// Sentiment timeline, oldest first.
    pub fn history(&self) -> StoreResult<Vec<HistoryEntry>> {
        let mut records = self.list_all()?;
        records.reverse();
        Ok(records.iter().map(HistoryEntry::from_stored).collect())
    }

    fn load_all(&self) -> StoreResult<Vec<StoredAnalysis>> {
        let txn = self.db.begin_read().map_err(redb_err("begin_read"))?;
        let table = txn.open_table(ANALYSES_TABLE).map_err(redb_err("open_table"))?;
        let mut records = Vec::new();
        for entry in table.iter().map_err(redb_err("iter"))? {
            let (_, value) = entry.map_err(redb_err("iter"))?;
            records.push(decode(value.value())?);
        }
        Ok(records)
    }
}

fn decode(bytes: &[u8]) -> StoreResult<StoredAnalysis> {
    bincode::deserialize(bytes).map_err(|e| StoreError::Serialization {
        message: e.to_string(),
    })
}

impl std::fmt::Debug for AnalysisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisStore").finish()
    }
}

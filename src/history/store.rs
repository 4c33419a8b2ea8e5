//! The persisted calculation-history log.

use super::error::HistoryError;
use super::storage::KeyValueStorage;
use crate::engine::CompletedCalculation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Storage key under which the serialized log lives.
pub const HISTORY_KEY: &str = "calculator-history";

/// Durable form of a record: the timestamp travels as an ISO-8601
/// string.
#[derive(Serialize, Deserialize)]
struct StoredRecord {
    expression: String,
    result: String,
    timestamp: String,
}

impl From<&CompletedCalculation> for StoredRecord {
    fn from(record: &CompletedCalculation) -> Self {
        Self {
            expression: record.expression.clone(),
            result: record.result.clone(),
            timestamp: record.timestamp.to_rfc3339(),
        }
    }
}

impl StoredRecord {
    /// Rebuild the in-memory record. An unreadable timestamp does not
    /// reject the record; it is replaced with the current time.
    fn restore(self) -> CompletedCalculation {
        let timestamp = match DateTime::parse_from_rfc3339(&self.timestamp) {
            Ok(parsed) => parsed.with_timezone(&Utc),
            Err(err) => {
                warn!(
                    timestamp = %self.timestamp,
                    %err,
                    "unreadable history timestamp, substituting current time"
                );
                Utc::now()
            }
        };

        CompletedCalculation {
            expression: self.expression,
            result: self.result,
            timestamp,
        }
    }
}

/// Ordered, durable log of completed calculations.
///
/// The log is newest-first and write-through: every mutation persists
/// the entire log to the backing storage before returning, so the
/// in-memory sequence and the durable form never diverge.
///
/// # Example
///
/// ```rust
/// use reckoner::engine::{Calculator, Operator};
/// use reckoner::history::{HistoryStore, MemoryStorage};
///
/// let mut store = HistoryStore::load(MemoryStorage::new());
/// let mut calculator = Calculator::new();
///
/// calculator.input_digit('2');
/// calculator.choose_operator(Operator::Add);
/// calculator.input_digit('2');
///
/// if let Some(record) = calculator.evaluate() {
///     store.append(record).unwrap();
/// }
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.entries()[0].result, "4");
/// ```
#[derive(Debug)]
pub struct HistoryStore<S: KeyValueStorage> {
    storage: S,
    entries: Vec<CompletedCalculation>,
}

impl<S: KeyValueStorage> HistoryStore<S> {
    /// Open the store, restoring any previously persisted log.
    ///
    /// A missing log starts empty. A malformed log is discarded (and
    /// removed from storage) after a diagnostic; the store trades the
    /// lost data for availability and never fails construction.
    pub fn load(mut storage: S) -> Self {
        let entries = match storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<StoredRecord>>(&raw) {
                Ok(stored) => stored.into_iter().map(StoredRecord::restore).collect(),
                Err(err) => {
                    warn!(%err, "discarding malformed calculation history");
                    if let Err(err) = storage.remove(HISTORY_KEY) {
                        warn!(%err, "failed to remove malformed calculation history");
                    }
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "failed to read calculation history");
                Vec::new()
            }
        };

        Self { storage, entries }
    }

    /// Prepend a record (newest-first) and persist the whole log.
    pub fn append(&mut self, record: CompletedCalculation) -> Result<(), HistoryError> {
        self.entries.insert(0, record);
        self.persist()
    }

    /// Empty the log and persist the empty state.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        self.persist()
    }

    /// The log, newest first.
    pub fn entries(&self) -> &[CompletedCalculation] {
        &self.entries
    }

    /// Number of recorded calculations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&mut self) -> Result<(), HistoryError> {
        let stored: Vec<StoredRecord> = self.entries.iter().map(StoredRecord::from).collect();
        let raw = serde_json::to_string(&stored)?;
        self.storage.set(HISTORY_KEY, &raw)?;
        Ok(())
    }
}

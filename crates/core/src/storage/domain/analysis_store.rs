use std::path::PathBuf;

use thiserror::Error;

use crate::analysis::domain::record::AnalysisRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to create results directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize record for {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("corrupt analysis record at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not determine results directory")]
    NoResultsDir,
}

/// Persistence seam for analysis records, keyed by `file_key`.
///
/// Upsert semantics live with the caller: look the key up with [`find`],
/// build or merge the record, then [`upsert`] the result. The store itself
/// never inspects metrics.
///
/// [`find`]: AnalysisStore::find
/// [`upsert`]: AnalysisStore::upsert
pub trait AnalysisStore: Send {
    fn find(&self, key: &str) -> Result<Option<AnalysisRecord>, StoreError>;

    /// Insert or replace the record stored under `record.file_key`.
    fn upsert(&mut self, record: &AnalysisRecord) -> Result<(), StoreError>;

    fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError>;

    /// Remove the record for `key`. Returns whether one existed.
    fn delete(&mut self, key: &str) -> Result<bool, StoreError>;
}

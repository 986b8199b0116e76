use serde::Serialize;
use thiserror::Error;

use crate::analysis::domain::record::AnalysisRecord;

#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("cannot compare a file with itself: {key}")]
    SameFile { key: String },
}

/// The per-file snapshot a comparison operates on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileMetrics {
    pub key: String,
    #[serde(rename = "speechRate")]
    pub speech_rate: u32,
    #[serde(rename = "fillerWordsCount")]
    pub filler_words_count: u32,
}

impl From<&AnalysisRecord> for FileMetrics {
    fn from(record: &AnalysisRecord) -> Self {
        Self {
            key: record.file_key.clone(),
            speech_rate: record.metrics.speech_rate,
            filler_words_count: record.metrics.filler_words_count,
        }
    }
}

/// Side-by-side deltas between two analyses. Ephemeral — recomputed per
/// request, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub file1: FileMetrics,
    pub file2: FileMetrics,
    /// `file2 - file1`; positive means file2 is faster.
    #[serde(rename = "speechRateChange")]
    pub speech_rate_change: i64,
    /// `file2 - file1`. Absolute counts, not normalized for recording
    /// length — comparing recordings of very different durations is
    /// misleading here.
    #[serde(rename = "fillerWordsChange")]
    pub filler_words_change: i64,
}

/// Diff two analyses. Comparing a file with itself is a caller input error.
pub fn compare(a: &FileMetrics, b: &FileMetrics) -> Result<ComparisonResult, ComparisonError> {
    if a.key == b.key {
        return Err(ComparisonError::SameFile { key: a.key.clone() });
    }

    Ok(ComparisonResult {
        speech_rate_change: i64::from(b.speech_rate) - i64::from(a.speech_rate),
        filler_words_change: i64::from(b.filler_words_count) - i64::from(a.filler_words_count),
        file1: a.clone(),
        file2: b.clone(),
    })
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::metrics::{AnalysisMetrics, MetricsCalculator};
use crate::transcription::domain::segment::Segment;
use crate::transcription::domain::transcription_result::TranscriptionResult;

/// The persisted shape of one analyzed recording, keyed by `file_key`.
///
/// Field names on the wire match the original document schema. `created_at`
/// is immutable once set; reanalysis overwrites everything else in place and
/// refreshes `updated_at`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisRecord {
    #[serde(rename = "fileKey")]
    pub file_key: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub transcript: String,
    pub segments: Vec<Segment>,
    pub metrics: AnalysisMetrics,
    pub language: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Assemble a fresh record from a transcription result.
    pub fn build(
        file_key: &str,
        file_name: &str,
        result: &TranscriptionResult,
        calculator: &MetricsCalculator,
    ) -> Self {
        let now = Utc::now();
        Self {
            file_key: file_key.to_string(),
            file_name: file_name.to_string(),
            transcript: result.transcript.clone(),
            segments: result.segments.clone(),
            metrics: calculator.estimate_from_text(&result.transcript),
            language: result.language.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite this record with a reanalysis of the same file.
    ///
    /// Preserves `file_key`, `file_name`, and `created_at`; everything else
    /// is replaced and `updated_at` refreshed.
    pub fn merge_into(&mut self, result: &TranscriptionResult, calculator: &MetricsCalculator) {
        self.transcript = result.transcript.clone();
        self.segments = result.segments.clone();
        self.metrics = calculator.estimate_from_text(&result.transcript);
        self.language = result.language.clone();
        self.updated_at = Utc::now();
    }
}

/// The last path component of a storage key, used as the display name.
pub fn file_name_from_key(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(transcript: &str) -> TranscriptionResult {
        TranscriptionResult {
            transcript: transcript.to_string(),
            segments: vec![Segment {
                start_time: 0.0,
                end_time: 2.0,
                text: transcript.to_string(),
            }],
            language: "ko".to_string(),
        }
    }

    #[test]
    fn test_build_computes_metrics_from_transcript() {
        let record = AnalysisRecord::build(
            "uploadedFiles/a.mp3",
            "a.mp3",
            &result("음 안녕 하세요 음 반갑습니다"),
            &MetricsCalculator::default(),
        );
        assert_eq!(record.file_key, "uploadedFiles/a.mp3");
        assert_eq!(record.metrics.total_words, 5);
        assert_eq!(record.metrics.filler_words_count, 2);
        assert_eq!(record.segments.len(), 1);
        assert_eq!(record.language, "ko");
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_merge_preserves_key_name_and_created_at() {
        let calc = MetricsCalculator::default();
        let mut record = AnalysisRecord::build("k", "k.mp3", &result("음 안녕"), &calc);
        let created = record.created_at;

        record.merge_into(&result("안녕 하세요 반갑습니다"), &calc);

        assert_eq!(record.file_key, "k");
        assert_eq!(record.file_name, "k.mp3");
        assert_eq!(record.created_at, created);
        assert_eq!(record.transcript, "안녕 하세요 반갑습니다");
        assert_eq!(record.metrics.total_words, 3);
        assert_eq!(record.metrics.filler_words_count, 0);
    }

    #[test]
    fn test_merge_never_decreases_updated_at() {
        let calc = MetricsCalculator::default();
        let mut record = AnalysisRecord::build("k", "k.mp3", &result("음"), &calc);
        let first = record.updated_at;

        record.merge_into(&result("어"), &calc);
        assert!(record.updated_at >= first);

        let second = record.updated_at;
        record.merge_into(&result("네"), &calc);
        assert!(record.updated_at >= second);
    }

    #[test]
    fn test_build_with_empty_transcript() {
        let record = AnalysisRecord::build(
            "silent",
            "silent.wav",
            &TranscriptionResult {
                transcript: String::new(),
                segments: Vec::new(),
                language: "ko".to_string(),
            },
            &MetricsCalculator::default(),
        );
        assert_eq!(record.metrics.total_words, 0);
        assert_eq!(record.metrics.speech_rate, 0);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = AnalysisRecord::build(
            "uploadedFiles/a.mp3",
            "a.mp3",
            &result("음 안녕"),
            &MetricsCalculator::default(),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"fileKey\""));
        assert!(json.contains("\"createdAt\""));

        let back: AnalysisRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.file_key, record.file_key);
        assert_eq!(back.metrics, record.metrics);
        assert_eq!(back.created_at, record.created_at);
    }

    #[test]
    fn test_file_name_from_key() {
        assert_eq!(file_name_from_key("uploadedFiles/1699_a.mp3"), "1699_a.mp3");
        assert_eq!(file_name_from_key("plain.mp3"), "plain.mp3");
    }
}

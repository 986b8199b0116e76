use crate::comparison::domain::comparator::{compare, ComparisonResult, FileMetrics};
use crate::storage::domain::analysis_store::AnalysisStore;

/// Fetches two stored analyses and diffs their metrics.
///
/// The two analyses may have been produced in any order, at any time — only
/// their stored metrics matter here.
pub struct CompareFilesUseCase {
    store: Box<dyn AnalysisStore>,
}

impl CompareFilesUseCase {
    pub fn new(store: Box<dyn AnalysisStore>) -> Self {
        Self { store }
    }

    pub fn run(&self, key1: &str, key2: &str) -> Result<ComparisonResult, Box<dyn std::error::Error>> {
        let first = self
            .store
            .find(key1)?
            .ok_or_else(|| format!("No analysis stored for key: {key1}"))?;
        let second = self
            .store
            .find(key2)?
            .ok_or_else(|| format!("No analysis stored for key: {key2}"))?;

        let result = compare(&FileMetrics::from(&first), &FileMetrics::from(&second))?;
        log::info!(
            "Compared {key1} vs {key2}: rate {:+}, fillers {:+}",
            result.speech_rate_change,
            result.filler_words_change
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::metrics::MetricsCalculator;
    use crate::analysis::domain::record::AnalysisRecord;
    use crate::comparison::domain::comparator::ComparisonError;
    use crate::storage::domain::analysis_store::StoreError;
    use crate::transcription::domain::transcription_result::TranscriptionResult;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        records: HashMap<String, AnalysisRecord>,
    }

    impl AnalysisStore for MemoryStore {
        fn find(&self, key: &str) -> Result<Option<AnalysisRecord>, StoreError> {
            Ok(self.records.get(key).cloned())
        }

        fn upsert(&mut self, record: &AnalysisRecord) -> Result<(), StoreError> {
            self.records.insert(record.file_key.clone(), record.clone());
            Ok(())
        }

        fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
            Ok(self.records.values().cloned().collect())
        }

        fn delete(&mut self, key: &str) -> Result<bool, StoreError> {
            Ok(self.records.remove(key).is_some())
        }
    }

    fn store_with(transcripts: &[(&str, &str)]) -> MemoryStore {
        let calc = MetricsCalculator::default();
        let mut store = MemoryStore::default();
        for (key, transcript) in transcripts {
            let record = AnalysisRecord::build(
                key,
                key,
                &TranscriptionResult {
                    transcript: transcript.to_string(),
                    segments: Vec::new(),
                    language: "ko".to_string(),
                },
                &calc,
            );
            store.upsert(&record).unwrap();
        }
        store
    }

    #[test]
    fn test_compares_two_stored_analyses() {
        let store = store_with(&[
            ("a", "음 안녕 하세요 음 반갑습니다"), // 5 words, 2 fillers, rate 7
            ("b", "오늘 발표를 시작하겠습니다"),   // 3 words, 0 fillers, rate 4
        ]);
        let uc = CompareFilesUseCase::new(Box::new(store));

        let result = uc.run("a", "b").unwrap();
        assert_eq!(result.speech_rate_change, -3);
        assert_eq!(result.filler_words_change, -2);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let store = store_with(&[("a", "음")]);
        let uc = CompareFilesUseCase::new(Box::new(store));

        let err = uc.run("a", "missing").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_same_key_is_rejected() {
        let store = store_with(&[("a", "음 안녕")]);
        let uc = CompareFilesUseCase::new(Box::new(store));

        let err = uc.run("a", "a").unwrap_err();
        assert!(err.downcast_ref::<ComparisonError>().is_some());
    }

    #[test]
    fn test_order_of_analysis_does_not_matter() {
        // Records inserted in reverse order compare identically
        let forward = CompareFilesUseCase::new(Box::new(store_with(&[
            ("a", "음 안녕"),
            ("b", "하나 둘 셋 넷"),
        ])));
        let reversed = CompareFilesUseCase::new(Box::new(store_with(&[
            ("b", "하나 둘 셋 넷"),
            ("a", "음 안녕"),
        ])));

        assert_eq!(forward.run("a", "b").unwrap(), reversed.run("a", "b").unwrap());
    }
}

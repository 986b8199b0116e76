use std::path::Path;

use crate::analysis::domain::metrics::MetricsCalculator;
use crate::analysis::domain::record::{file_name_from_key, AnalysisRecord};
use crate::storage::domain::analysis_store::AnalysisStore;
use crate::transcription::domain::transcriber::Transcriber;

/// Transcribes one audio file and upserts its analysis record by key.
///
/// Transcription failures propagate unchanged; nothing is retried here.
pub struct AnalyzeFileUseCase {
    transcriber: Box<dyn Transcriber>,
    store: Box<dyn AnalysisStore>,
    calculator: MetricsCalculator,
}

impl AnalyzeFileUseCase {
    pub fn new(
        transcriber: Box<dyn Transcriber>,
        store: Box<dyn AnalysisStore>,
        calculator: MetricsCalculator,
    ) -> Self {
        Self {
            transcriber,
            store,
            calculator,
        }
    }

    pub fn run(
        &mut self,
        audio: &Path,
        file_key: &str,
    ) -> Result<AnalysisRecord, Box<dyn std::error::Error>> {
        // 1. Transcribe (slow, blocking)
        let result = self.transcriber.transcribe(audio)?;
        log::info!(
            "Transcribed {}: {} segments, language {}",
            file_key,
            result.segments.len(),
            result.language
        );

        // 2. Build a fresh record or merge into the existing one for this key
        let record = match self.store.find(file_key)? {
            Some(mut existing) => {
                log::info!("Reanalyzing {file_key}, keeping original creation time");
                existing.merge_into(&result, &self.calculator);
                existing
            }
            None => AnalysisRecord::build(
                file_key,
                file_name_from_key(file_key),
                &result,
                &self.calculator,
            ),
        };

        // 3. Persist
        self.store.upsert(&record)?;

        Ok(record)
    }
}

use serde::{Deserialize, Serialize};

use super::filler_lexicon::FillerLexicon;
use super::tokenizer;
use crate::shared::constants::{DEFAULT_RATE_MULTIPLIER, MS_PER_MINUTE};

/// Speech metrics derived from a transcript.
///
/// Invariant: `filler_words_count <= total_words`. Never mutated after
/// creation — recomputed wholesale when the underlying transcript changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    /// Estimated words per minute.
    #[serde(rename = "speechRate")]
    pub speech_rate: u32,
    #[serde(rename = "fillerWordsCount")]
    pub filler_words_count: u32,
    #[serde(rename = "totalWords")]
    pub total_words: u32,
    /// Human-readable summary embedding all three numbers.
    pub analysis: String,
}

/// Derives [`AnalysisMetrics`] from transcripts or live-session counters.
///
/// Carries the filler lexicon and the rate multiplier as configuration so no
/// language or heuristic constant is baked into the computation itself.
#[derive(Clone, Debug)]
pub struct MetricsCalculator {
    lexicon: FillerLexicon,
    rate_multiplier: f64,
}

impl MetricsCalculator {
    pub fn new(lexicon: FillerLexicon, rate_multiplier: f64) -> Self {
        Self {
            lexicon,
            rate_multiplier,
        }
    }

    pub fn lexicon(&self) -> &FillerLexicon {
        &self.lexicon
    }

    /// Estimate metrics from transcript text alone.
    ///
    /// With no timing data, the rate is `floor(total_words * multiplier)` —
    /// a fixed heuristic, not a true temporal rate.
    pub fn estimate_from_text(&self, transcript: &str) -> AnalysisMetrics {
        let tokens = tokenizer::split(transcript);
        let total_words = tokens.len() as u32;
        let filler_words_count = self.lexicon.count_fillers(&tokens);
        let speech_rate = (total_words as f64 * self.rate_multiplier).floor() as u32;

        AnalysisMetrics {
            speech_rate,
            filler_words_count,
            total_words,
            analysis: summary(total_words, filler_words_count, speech_rate),
        }
    }

    /// Estimate metrics from live-session counters and elapsed wall time.
    ///
    /// Zero elapsed time means insufficient data and yields a rate of 0
    /// rather than an error. The filler count is clamped to the word count
    /// so the metrics invariant holds for any caller input.
    pub fn estimate_from_session(
        &self,
        word_count: u32,
        elapsed_ms: u64,
        filler_word_count: u32,
    ) -> AnalysisMetrics {
        let speech_rate = if elapsed_ms == 0 {
            0
        } else {
            let minutes = elapsed_ms as f64 / MS_PER_MINUTE;
            (word_count as f64 / minutes).round() as u32
        };
        let filler_words_count = filler_word_count.min(word_count);

        AnalysisMetrics {
            speech_rate,
            filler_words_count,
            total_words: word_count,
            analysis: summary(word_count, filler_words_count, speech_rate),
        }
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new(FillerLexicon::korean(), DEFAULT_RATE_MULTIPLIER)
    }
}

fn summary(total_words: u32, filler_words: u32, speech_rate: u32) -> String {
    format!(
        "Transcription analysis:\n\n\
         Total words: {total_words}\n\
         Filler words: {filler_words}\n\
         Estimated speech rate: {speech_rate} WPM"
    )
}

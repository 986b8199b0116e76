use serde::{Deserialize, Serialize};

use super::segment::Segment;

/// Output of a transcriber run: full text plus timestamped segments.
///
/// An empty transcript is valid — silent audio transcribes to nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub transcript: String,
    pub segments: Vec<Segment>,
    /// BCP-47-ish language tag as reported by the recognizer, e.g. "ko".
    pub language: String,
}

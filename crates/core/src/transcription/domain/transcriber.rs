use std::path::{Path, PathBuf};

use thiserror::Error;

use super::transcription_result::TranscriptionResult;

/// Ways a transcription run can fail.
///
/// These are propagated to the caller unchanged; retry policy, if any,
/// belongs to whoever invokes the transcriber.
#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("audio file not found: {0}")]
    AudioNotFound(PathBuf),
    #[error("failed to spawn transcription command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("transcription command exited with status {code:?}: {stderr}")]
    ExitStatus { code: Option<i32>, stderr: String },
    #[error("malformed transcription output: {source}; raw output: {raw}")]
    MalformedOutput {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Domain interface for speech-to-text transcription.
///
/// Implementations may be slow and blocking, and each invocation fails
/// independently. A successful call returns a fully-populated
/// [`TranscriptionResult`]; an empty transcript is a valid success.
pub trait Transcriber: Send {
    fn transcribe(&self, audio: &Path) -> Result<TranscriptionResult, TranscriptionError>;
}

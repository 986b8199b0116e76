use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use crate::transcription::domain::segment::Segment;
use crate::transcription::domain::transcriber::{Transcriber, TranscriptionError};
use crate::transcription::domain::transcription_result::TranscriptionResult;

/// Transcriber that shells out to an external Whisper script.
///
/// The script receives the audio path as its single argument and must print
/// a JSON document on stdout:
///
/// ```json
/// {"text": "...", "segments": [{"start": 0.0, "end": 1.2, "text": "..."}], "language": "ko"}
/// ```
///
/// `segments` and `language` may be null. A non-zero exit or unparseable
/// stdout is a [`TranscriptionError`] carrying the diagnostic payload.
#[derive(Clone, Debug)]
pub struct WhisperCommandTranscriber {
    program: String,
    script: PathBuf,
    language: String,
}

impl WhisperCommandTranscriber {
    pub fn new(program: &str, script: &Path, language: &str) -> Self {
        Self {
            program: program.to_string(),
            script: script.to_path_buf(),
            language: language.to_string(),
        }
    }
}

impl Transcriber for WhisperCommandTranscriber {
    fn transcribe(&self, audio: &Path) -> Result<TranscriptionResult, TranscriptionError> {
        if !audio.exists() {
            return Err(TranscriptionError::AudioNotFound(audio.to_path_buf()));
        }

        log::debug!(
            "Running {} {} {}",
            self.program,
            self.script.display(),
            audio.display()
        );

        let output = Command::new(&self.program)
            .arg(&self.script)
            .arg(audio)
            .output()
            .map_err(|e| TranscriptionError::Spawn {
                command: format!("{} {}", self.program, self.script.display()),
                source: e,
            })?;

        if !output.status.success() {
            return Err(TranscriptionError::ExitStatus {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let wire: WireOutput = serde_json::from_str(&stdout).map_err(|e| {
            TranscriptionError::MalformedOutput {
                raw: stdout.into_owned(),
                source: e,
            }
        })?;

        Ok(TranscriptionResult {
            transcript: wire.text,
            segments: wire
                .segments
                .unwrap_or_default()
                .into_iter()
                .map(|s| Segment {
                    start_time: s.start,
                    end_time: s.end,
                    text: s.text,
                })
                .collect(),
            language: wire.language.unwrap_or_else(|| self.language.clone()),
        })
    }
}

/// Raw Whisper JSON shape, before conversion to domain types.
#[derive(Debug, Deserialize)]
struct WireOutput {
    text: String,
    #[serde(default)]
    segments: Option<Vec<WireSegment>>,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireSegment {
    start: f64,
    end: f64,
    text: String,
}

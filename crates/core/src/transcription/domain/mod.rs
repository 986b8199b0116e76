pub mod segment;
pub mod transcriber;
pub mod transcription_result;

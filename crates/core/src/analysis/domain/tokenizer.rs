/// Splits transcript text into word tokens on runs of whitespace.
///
/// Word boundaries are whitespace-only — transcripts from the recognizer are
/// space-delimited, so no locale-aware segmentation is attempted. Empty
/// tokens are discarded; empty input yields an empty sequence.
pub fn split(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

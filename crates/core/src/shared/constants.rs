/// Korean discourse fillers counted as hesitation markers.
///
/// Exact-match tokens only; no stemming. Callers analyzing other languages
/// supply their own lexicon.
pub const KOREAN_FILLER_WORDS: &[&str] = &[
    "음",
    "아",
    "어",
    "여",
    "이",
    "네",
    "그",
    "그런데",
    "그리고",
    "그런",
    "그러면",
    "그러니까",
];

/// Words-per-minute multiplier applied to the raw word count when no timing
/// data exists. An approximation, not a true temporal rate.
pub const DEFAULT_RATE_MULTIPLIER: f64 = 1.5;

pub const MS_PER_MINUTE: f64 = 60_000.0;

pub const DEFAULT_LANGUAGE: &str = "ko";

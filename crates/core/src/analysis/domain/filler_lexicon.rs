use std::collections::HashSet;

use crate::shared::constants::KOREAN_FILLER_WORDS;

/// A per-language set of filler words.
///
/// Membership is exact-match and case-sensitive: "음" counts, "음." does not.
/// The default lexicon is the Korean set; callers targeting another language
/// build one from their own word list.
#[derive(Clone, Debug)]
pub struct FillerLexicon {
    words: HashSet<String>,
}

impl FillerLexicon {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn korean() -> Self {
        Self::new(KOREAN_FILLER_WORDS.iter().copied())
    }

    pub fn is_filler(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of tokens that are filler words.
    pub fn count_fillers(&self, tokens: &[&str]) -> u32 {
        tokens.iter().filter(|t| self.is_filler(t)).count() as u32
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for FillerLexicon {
    fn default() -> Self {
        Self::korean()
    }
}

pub mod filler_lexicon;
pub mod metrics;
pub mod record;
pub mod tokenizer;

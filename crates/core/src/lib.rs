pub mod analysis;
pub mod comparison;
pub mod pipeline;
pub mod shared;
pub mod storage;
pub mod transcription;

pub mod analysis_store;

//! # snpscan-core
//!
//! Models shared across snpscan (reference entries, genotype observations,
//! matched and scored rows) together with the SNP matcher that joins a curated
//! SNP database against a subject's genotype table.
//!
pub mod consts;
pub mod errors;
pub mod matcher;
pub mod models;
pub mod utils;

// re-exports
pub use errors::*;
pub use matcher::*;
pub use models::*;

//! # Input/Output utilities for snpscan.
//!
//! Readers for the curated SNP database (CSV) and for a subject's genotype
//! table in any of the supported formats (VCF, tab separated vendor exports
//! and ZIP archives of those), plus writers for the scored result table and
//! the JSON condition summary.
//!
pub mod archive;
pub mod database;
pub mod error;
pub mod format;
pub mod genotypes;
pub mod results;
pub mod summary;
pub mod tsv;
pub mod vcf;

// re-expose core functions
pub use database::*;
pub use error::*;
pub use format::*;
pub use genotypes::*;
pub use results::*;
pub use summary::*;

//! Conditions snpscan can report on.
//!
//! Each condition decides how a matched row is scored and which groupings of
//! scored rows are aggregated into verdicts. Conditions are looked up by key
//! through [registry::condition_from_key].

pub mod mthfr;
pub mod neuropsych;
pub mod registry;
pub mod spondyloarthritis;

use snpscan_core::consts::{C_APPLICATION, C_CONDITION};
use snpscan_core::errors::ScanError;
use snpscan_core::models::{GroupScore, MatchedRow, RowScore, ScoredRow};

use crate::aggregate::{Grouping, summarize};

pub use mthfr::Mthfr;
pub use neuropsych::Neuropsych;
pub use registry::*;
pub use spondyloarthritis::Spondyloarthritis;

pub trait Condition {
    /// Registry key, e.g. `mthfr`.
    fn key(&self) -> &'static str;

    /// Display name, e.g. `MTHFR`.
    fn name(&self) -> &'static str;

    /// Database used when none is configured.
    fn default_database(&self) -> &'static str;

    /// Score a single matched row.
    fn score(&self, row: &MatchedRow) -> Result<RowScore, ScanError>;

    /// The groupings aggregated into this condition's verdicts, in report order.
    fn groupings(&self) -> Vec<Grouping>;

    /// Result columns left out of the results table.
    fn dropped_columns(&self) -> &'static [&'static str] {
        &[C_APPLICATION, C_CONDITION]
    }

    /// Aggregate scored rows into one verdict per grouping.
    fn summarize(&self, rows: &[ScoredRow]) -> Vec<GroupScore> {
        summarize(rows, &self.groupings())
    }
}

use snpscan_core::consts::V_DIAGNOSIS;
use snpscan_core::errors::ScanError;
use snpscan_core::models::{MatchedRow, RowScore};

use super::Condition;
use crate::aggregate::Grouping;
use crate::consts::{K_DIAGNOSTIC, MTHFR_KEY};
use crate::scorer::score_diagnostic;

/// Methylenetetrahydrofolate reductase variants. Every SNP is a diagnostic marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mthfr;

impl Mthfr {
    pub fn create() -> Box<dyn Condition> {
        Box::new(Mthfr)
    }
}

impl Condition for Mthfr {
    fn key(&self) -> &'static str {
        MTHFR_KEY
    }

    fn name(&self) -> &'static str {
        "MTHFR"
    }

    fn default_database(&self) -> &'static str {
        "db/snpdb_mthfr.csv"
    }

    fn score(&self, row: &MatchedRow) -> Result<RowScore, ScanError> {
        score_diagnostic(row)
    }

    fn groupings(&self) -> Vec<Grouping> {
        vec![Grouping::diagnostic(K_DIAGNOSTIC, "Diagnostic", V_DIAGNOSIS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use snpscan_core::models::{ReferenceEntry, Verdict};

    #[test]
    fn test_scores_every_row_as_diagnostic() {
        let row = MatchedRow::new(ReferenceEntry::new("rs1801131", "Whatever", "C"), "CC");
        let score = Mthfr.score(&row).unwrap();
        assert_eq!(score.risk, 2);
        assert_eq!(score.association, "Increased risk");
    }

    #[test]
    fn test_empty_scan_is_unknown() {
        let scores = Mthfr.summarize(&[]);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].verdict, Verdict::UnknownRisk);
    }
}

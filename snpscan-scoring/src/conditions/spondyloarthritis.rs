use snpscan_core::consts::V_DIAGNOSIS;
use snpscan_core::errors::ScanError;
use snpscan_core::models::{MatchedRow, RowScore};

use super::Condition;
use crate::aggregate::Grouping;
use crate::consts::*;
use crate::scorer::score_by_application;

///
/// Spondyloarthritis: diagnostic markers plus response markers for TNF
/// inhibitors and methotrexate.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct Spondyloarthritis;

impl Spondyloarthritis {
    pub fn create() -> Box<dyn Condition> {
        Box::new(Spondyloarthritis)
    }
}

impl Condition for Spondyloarthritis {
    fn key(&self) -> &'static str {
        SPONDYLOARTHRITIS_KEY
    }

    fn name(&self) -> &'static str {
        "Spondyloarthritis"
    }

    fn default_database(&self) -> &'static str {
        "db/snpdb_sa.csv"
    }

    fn score(&self, row: &MatchedRow) -> Result<RowScore, ScanError> {
        score_by_application(row)
    }

    fn groupings(&self) -> Vec<Grouping> {
        vec![
            Grouping::diagnostic(K_DIAGNOSTIC, "Diagnostic", V_DIAGNOSIS),
            Grouping::treatment(K_TNF_TREATMENT, "TNF inhibitor treatment", V_TREATMENT_TNF_POS),
            Grouping::treatment(K_MTX_TREATMENT, "Methotrexate treatment", V_TREATMENT_MTX_POS),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use snpscan_core::models::{ReferenceEntry, Verdict};

    fn scored(application: &str, risk_allele: &str, genotype: &str) -> snpscan_core::models::ScoredRow {
        let row = MatchedRow::new(ReferenceEntry::new("rs0", application, risk_allele), genotype);
        let score = Spondyloarthritis.score(&row).unwrap();
        row.into_scored(score)
    }

    #[rstest]
    fn test_summary() {
        let rows = vec![
            scored("Diagnosis", "A", "AA"),
            scored("Diagnosis", "A", "GG"),
            scored(V_TREATMENT_TNF_POS, "T", "CC"),
            scored(V_TREATMENT_TNF_POS, "AG", "GA"),
        ];

        let scores = Spondyloarthritis.summarize(&rows);
        let verdicts: Vec<(&str, Verdict)> =
            scores.iter().map(|s| (s.key.as_str(), s.verdict)).collect();

        assert_eq!(
            verdicts,
            vec![
                (K_DIAGNOSTIC, Verdict::SmallIncrease),
                // 1 / 3
                (K_TNF_TREATMENT, Verdict::HighOpportunity),
                (K_MTX_TREATMENT, Verdict::InsufficientData),
            ]
        );
        assert_eq!(
            scores[1].insight(),
            "High opportunity for positive clinical response"
        );
    }
}

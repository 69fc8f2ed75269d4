use snpscan_core::consts::C_CONDITION;
use snpscan_core::errors::ScanError;
use snpscan_core::models::{MatchedRow, RowScore};

use super::Condition;
use crate::aggregate::Grouping;
use crate::consts::*;
use crate::scorer::score_diagnostic;

/// Disorders reported on, with the summary key of each.
pub const DISORDERS: [(&str, &str); 6] = [
    ("diagnostic_score_asd", V_ASD),
    ("diagnostic_score_ts", V_TS),
    ("diagnostic_score_bip", V_BIP),
    ("diagnostic_score_scz", V_SCZ),
    ("diagnostic_score_mdd", V_MDD),
    ("diagnostic_score_ano", V_ANO),
];

///
/// Neuropsychiatric disorders. The application label of each SNP names the
/// disorder it is a diagnostic marker for, and every disorder is aggregated
/// on its own.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct Neuropsych;

impl Neuropsych {
    pub fn create() -> Box<dyn Condition> {
        Box::new(Neuropsych)
    }
}

impl Condition for Neuropsych {
    fn key(&self) -> &'static str {
        NEUROPSYCH_KEY
    }

    fn name(&self) -> &'static str {
        "Neuropsychiatric disorders"
    }

    fn default_database(&self) -> &'static str {
        "db/snpdb_neuropsych.csv"
    }

    fn score(&self, row: &MatchedRow) -> Result<RowScore, ScanError> {
        score_diagnostic(row)
    }

    fn groupings(&self) -> Vec<Grouping> {
        DISORDERS
            .iter()
            .map(|(key, disorder)| Grouping::diagnostic(key, disorder, disorder))
            .collect()
    }

    // the application column names the disorder, so it stays
    fn dropped_columns(&self) -> &'static [&'static str] {
        &[C_CONDITION]
    }
}

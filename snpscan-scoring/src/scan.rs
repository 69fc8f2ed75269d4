use log::warn;

use snpscan_core::matcher::{MatchReport, match_snps};
use snpscan_core::models::{
    ConditionSummary, MatchedRow, Observation, ReferenceEntry, RowFault, ScoredRow,
};

use crate::conditions::Condition;

///
/// Score every matched row with the condition's scorer.
///
/// Rows that fail validation are returned as faults and left out of the scored rows.
///
pub fn score_rows(condition: &dyn Condition, rows: Vec<MatchedRow>) -> (Vec<ScoredRow>, Vec<RowFault>) {
    let mut scored = Vec::with_capacity(rows.len());
    let mut faults = Vec::new();

    for row in rows {
        match condition.score(&row) {
            Ok(score) => scored.push(row.into_scored(score)),
            Err(err) => {
                warn!("Skipping SNP {}: {}", row.snp(), err);
                faults.push(RowFault::new(&err));
            }
        }
    }

    (scored, faults)
}

///
/// Score a match report and aggregate it into the condition's summary.
///
pub fn summarize_condition(condition: &dyn Condition, report: MatchReport) -> ConditionSummary {
    let MatchReport { rows, mut faults } = report;

    let (data, scoring_faults) = score_rows(condition, rows);
    faults.extend(scoring_faults);

    ConditionSummary {
        condition: condition.name().to_string(),
        scores: condition.summarize(&data),
        data,
        faults,
    }
}

///
/// Match, score and aggregate in one pass.
///
/// # Arguments
/// - condition: the condition to report on
/// - entries: the curated SNP database
/// - observations: the subject's genotype table
///
pub fn scan(
    condition: &dyn Condition,
    entries: &[ReferenceEntry],
    observations: &[Observation],
) -> ConditionSummary {
    summarize_condition(condition, match_snps(entries, observations))
}

//! Aggregation of scored rows into per-grouping verdicts.

use std::str::FromStr;

use snpscan_core::models::{Application, GroupScore, ScoredRow, Verdict};

use crate::consts::{DIAGNOSTIC_SMALL_INCREASE_MAX, TREATMENT_LOW_OPPORTUNITY_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Average / small increase / increased risk.
    Diagnostic,
    /// Low / high opportunity for the expected treatment response.
    TreatmentOpportunity,
}

///
/// A named selection of scored rows, by application label, that is aggregated
/// into a single verdict.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    pub key: String,
    pub name: String,
    pub application: String,
    pub kind: GroupKind,
    pub qualifier: String,
}

impl Grouping {
    pub fn diagnostic(key: &str, name: &str, application: &str) -> Self {
        Grouping {
            key: key.to_string(),
            name: name.to_string(),
            application: application.to_string(),
            kind: GroupKind::Diagnostic,
            qualifier: String::new(),
        }
    }

    ///
    /// A treatment grouping. The verdict is qualified by the expected response
    /// encoded in the application label, e.g. ` for positive clinical response`.
    ///
    pub fn treatment(key: &str, name: &str, application: &str) -> Self {
        let qualifier = match Application::from_str(application) {
            Ok(Application::Treatment { response, .. }) => {
                format!(" for {} clinical response", response.to_lowercase())
            }
            _ => String::new(),
        };

        Grouping {
            key: key.to_string(),
            name: name.to_string(),
            application: application.to_string(),
            kind: GroupKind::TreatmentOpportunity,
            qualifier,
        }
    }
}

/// Summed risk and maximum risk over a set of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskTotals {
    pub risk: u32,
    pub max_risk: u32,
    pub rows: usize,
}

impl RiskTotals {
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a ScoredRow>,
    {
        rows.into_iter().fold(RiskTotals::default(), |acc, row| RiskTotals {
            risk: acc.risk + row.risk as u32,
            max_risk: acc.max_risk + row.max_risk as u32,
            rows: acc.rows + 1,
        })
    }

    /// `risk / max_risk`, or `None` when nothing could contribute.
    pub fn relative_risk(&self) -> Option<f64> {
        if self.max_risk == 0 {
            None
        } else {
            Some(self.risk as f64 / self.max_risk as f64)
        }
    }

    /// Whether `risk / max_risk <= numerator / denominator`, compared exactly.
    fn at_most(&self, (numerator, denominator): (u32, u32)) -> bool {
        self.risk * denominator <= numerator * self.max_risk
    }
}

pub fn diagnostic_verdict(totals: &RiskTotals) -> Verdict {
    if totals.max_risk == 0 {
        Verdict::UnknownRisk
    } else if totals.risk == 0 {
        Verdict::AverageRisk
    } else if totals.at_most(DIAGNOSTIC_SMALL_INCREASE_MAX) {
        Verdict::SmallIncrease
    } else {
        Verdict::IncreasedRisk
    }
}

pub fn opportunity_verdict(totals: &RiskTotals) -> Verdict {
    if totals.max_risk == 0 {
        Verdict::InsufficientData
    } else if totals.at_most(TREATMENT_LOW_OPPORTUNITY_MAX) {
        Verdict::LowOpportunity
    } else {
        Verdict::HighOpportunity
    }
}

///
/// Aggregate the rows whose application label equals the grouping's.
///
pub fn summarize_group(rows: &[ScoredRow], grouping: &Grouping) -> GroupScore {
    let totals =
        RiskTotals::from_rows(rows.iter().filter(|r| r.application == grouping.application));

    let verdict = match grouping.kind {
        GroupKind::Diagnostic => diagnostic_verdict(&totals),
        GroupKind::TreatmentOpportunity => opportunity_verdict(&totals),
    };

    GroupScore {
        key: grouping.key.clone(),
        name: grouping.name.clone(),
        verdict,
        relative_risk: totals.relative_risk(),
        rows: totals.rows,
        qualifier: grouping.qualifier.clone(),
    }
}

///
/// Aggregate every grouping independently, in order.
///
pub fn summarize(rows: &[ScoredRow], groupings: &[Grouping]) -> Vec<GroupScore> {
    groupings
        .iter()
        .map(|grouping| summarize_group(rows, grouping))
        .collect()
}

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::models::{RowFault, ScoredRow};

///
/// Qualitative label for one aggregated grouping of rows.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Average risk")]
    AverageRisk,
    #[serde(rename = "Small increase in risk")]
    SmallIncrease,
    #[serde(rename = "Increased risk")]
    IncreasedRisk,
    #[serde(rename = "Unknown risk")]
    UnknownRisk,
    #[serde(rename = "Low opportunity")]
    LowOpportunity,
    #[serde(rename = "High opportunity")]
    HighOpportunity,
    #[serde(rename = "Insufficient data")]
    InsufficientData,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::AverageRisk => "Average risk",
            Verdict::SmallIncrease => "Small increase in risk",
            Verdict::IncreasedRisk => "Increased risk",
            Verdict::UnknownRisk => "Unknown risk",
            Verdict::LowOpportunity => "Low opportunity",
            Verdict::HighOpportunity => "High opportunity",
            Verdict::InsufficientData => "Insufficient data",
        }
    }

    /// Whether the grouping had no rows to aggregate.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Verdict::UnknownRisk | Verdict::InsufficientData)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// The aggregate verdict of one named grouping.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupScore {
    /// Stable key used in serialized summaries, e.g. `diagnostic_score`.
    pub key: String,
    /// Human readable name, e.g. `TNF inhibitor treatment`.
    pub name: String,
    pub verdict: Verdict,
    /// `sum(risk) / sum(max_risk)`; absent when the grouping had no rows.
    pub relative_risk: Option<f64>,
    pub rows: usize,
    /// Appended to the verdict when presented, e.g. ` for positive clinical response`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub qualifier: String,
}

impl GroupScore {
    pub fn insight(&self) -> String {
        format!("{}{}", self.verdict, self.qualifier)
    }
}

///
/// Everything a scan concludes about one condition.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub condition: String,
    pub scores: Vec<GroupScore>,
    pub data: Vec<ScoredRow>,
    #[serde(default)]
    pub faults: Vec<RowFault>,
}

impl ConditionSummary {
    pub fn score(&self, key: &str) -> Option<&GroupScore> {
        self.scores.iter().find(|s| s.key == key)
    }
}

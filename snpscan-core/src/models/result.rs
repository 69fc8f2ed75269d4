use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::errors::ScanError;
use crate::models::ReferenceEntry;

///
/// A reference entry joined with the single observation found for its SNP.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRow {
    pub entry: ReferenceEntry,
    pub genotype: String,
}

///
/// Per-SNP outcome of a risk scorer.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowScore {
    pub risk: u8,
    pub max_risk: u8,
    pub association: String,
}

///
/// A matched row carrying its risk contribution. This is the record written
/// to the results table and the summary's `data` section.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRow {
    #[serde(rename = "Condition")]
    pub condition: String,

    #[serde(rename = "Application")]
    pub application: String,

    #[serde(rename = "SNP")]
    pub snp: String,

    #[serde(rename = "Gene/locus")]
    pub gene: String,

    #[serde(rename = "Genotype")]
    pub genotype: String,

    #[serde(rename = "Risk allele")]
    pub risk_allele: String,

    #[serde(rename = "Protective allele")]
    pub protective_allele: String,

    #[serde(rename = "Association")]
    pub association: String,

    #[serde(rename = "Reference")]
    pub reference: String,

    #[serde(rename = "Risk")]
    pub risk: u8,

    #[serde(rename = "Max risk")]
    pub max_risk: u8,
}

impl MatchedRow {
    pub fn new(entry: ReferenceEntry, genotype: &str) -> Self {
        MatchedRow {
            entry,
            genotype: genotype.to_string(),
        }
    }

    pub fn snp(&self) -> &str {
        &self.entry.snp
    }

    pub fn into_scored(self, score: RowScore) -> ScoredRow {
        let entry = self.entry;
        ScoredRow {
            condition: entry.condition,
            application: entry.application,
            snp: entry.snp,
            gene: entry.gene,
            genotype: self.genotype,
            risk_allele: entry.risk_allele,
            protective_allele: entry.protective_allele,
            association: score.association,
            reference: entry.reference,
            risk: score.risk,
            max_risk: score.max_risk,
        }
    }
}

impl ScoredRow {
    ///
    /// Look up a result column by its header name.
    ///
    pub fn column(&self, name: &str) -> Option<String> {
        let value = match name {
            C_CONDITION => self.condition.clone(),
            C_APPLICATION => self.application.clone(),
            C_SNP => self.snp.clone(),
            C_GENE => self.gene.clone(),
            C_GENOTYPE => self.genotype.clone(),
            C_RISK_ALLELE => self.risk_allele.clone(),
            C_PROTECTIVE_ALLELE => self.protective_allele.clone(),
            C_ASSOCIATION => self.association.clone(),
            C_REFERENCE => self.reference.clone(),
            C_RISK => self.risk.to_string(),
            C_MAX_RISK => self.max_risk.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

///
/// A data-integrity error attached to one SNP. Faulted rows are left out of
/// aggregation but reported with the summary.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFault {
    pub snp: String,
    pub error: String,
}

impl RowFault {
    pub fn new(error: &ScanError) -> Self {
        RowFault {
            snp: error.snp().to_string(),
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_into_scored_keeps_reference_fields() {
        let entry = ReferenceEntry::new("rs1801133", "Diagnosis", "A")
            .with_condition("MTHFR")
            .with_gene("MTHFR C677T");
        let row = MatchedRow::new(entry, "AG");
        let scored = row.into_scored(RowScore {
            risk: 1,
            max_risk: 2,
            association: "Small increase in risk".to_string(),
        });

        assert_eq!(scored.snp, "rs1801133");
        assert_eq!(scored.condition, "MTHFR");
        assert_eq!(scored.genotype, "AG");
        assert_eq!(scored.column(C_GENE).unwrap(), "MTHFR C677T");
        assert_eq!(scored.column(C_MAX_RISK).unwrap(), "2");
        assert!(scored.column("Unknown column").is_none());
    }
}

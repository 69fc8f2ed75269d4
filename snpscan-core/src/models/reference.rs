use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ScanError;
use crate::models::Application;

///
/// One tracked SNP from the curated database.
///
/// Field names follow the database CSV header. Empty cells deserialize
/// to empty strings.
///
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferenceEntry {
    #[serde(rename = "SNP")]
    pub snp: String,

    #[serde(rename = "Condition", default)]
    pub condition: String,

    #[serde(rename = "Application", default)]
    pub application: String,

    #[serde(rename = "Gene/locus", default)]
    pub gene: String,

    #[serde(rename = "Genotype", default)]
    pub genotype: String,

    #[serde(rename = "Risk allele", default)]
    pub risk_allele: String,

    #[serde(rename = "Protective allele", default)]
    pub protective_allele: String,

    #[serde(rename = "Association", default)]
    pub association: String,

    #[serde(rename = "Reference", default)]
    pub reference: String,
}

impl ReferenceEntry {
    pub fn new(snp: &str, application: &str, risk_allele: &str) -> Self {
        ReferenceEntry {
            snp: snp.to_string(),
            application: application.to_string(),
            risk_allele: risk_allele.to_string(),
            ..Default::default()
        }
    }

    pub fn with_condition(mut self, condition: &str) -> Self {
        self.condition = condition.to_string();
        self
    }

    pub fn with_gene(mut self, gene: &str) -> Self {
        self.gene = gene.to_string();
        self
    }

    ///
    /// Parse the application label of this entry.
    ///
    pub fn parsed_application(&self) -> Result<Application, ScanError> {
        Application::from_str(&self.application).map_err(|application| {
            ScanError::MalformedApplication {
                snp: self.snp.clone(),
                application,
            }
        })
    }
}

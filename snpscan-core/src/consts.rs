//! Column names and label vocabulary shared by the readers, scorers and writers.

// database / result table columns
pub const C_CONDITION: &str = "Condition";
pub const C_APPLICATION: &str = "Application";
pub const C_SNP: &str = "SNP";
pub const C_GENE: &str = "Gene/locus";
pub const C_GENOTYPE: &str = "Genotype";
pub const C_RISK_ALLELE: &str = "Risk allele";
pub const C_PROTECTIVE_ALLELE: &str = "Protective allele";
pub const C_ASSOCIATION: &str = "Association";
pub const C_REFERENCE: &str = "Reference";
pub const C_RISK: &str = "Risk";
pub const C_MAX_RISK: &str = "Max risk";

/// Result table columns in output order.
pub const RESULT_COLUMNS: [&str; 9] = [
    C_CONDITION,
    C_APPLICATION,
    C_SNP,
    C_GENE,
    C_GENOTYPE,
    C_RISK_ALLELE,
    C_PROTECTIVE_ALLELE,
    C_ASSOCIATION,
    C_REFERENCE,
];

// application labels
pub const V_DIAGNOSIS: &str = "Diagnosis";
pub const V_TREATMENT: &str = "Treatment";
pub const TREATMENT_DELIMITER: char = '_';

/// Per-SNP diagnostic associations, indexed by risk count.
pub const ASSOCIATIONS_DIAGNOSIS: [&str; 3] =
    ["Average risk", "Small increase in risk", "Increased risk"];
pub const CLINICAL_RESPONSE: &str = "clinical response";
pub const UNKNOWN_RESPONSE: &str = "Unknown";

pub const MAX_RISK_SINGLE_ALLELE: u8 = 2;
pub const MAX_RISK_COMBINED_ALLELE: u8 = 1;

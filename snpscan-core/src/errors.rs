use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Unrecognized genotype call {call:?} for SNP {snp}")]
    UnrecognizedCall { snp: String, call: String },

    #[error("Unsupported insertion/deletion for SNP {snp}: ref={reference}, alt={alternate}")]
    UnsupportedIndel {
        snp: String,
        reference: String,
        alternate: String,
    },

    #[error(
        "Risk count {risk} out of range for SNP {snp} (genotype {genotype:?}, risk allele {risk_allele:?})"
    )]
    RiskOutOfRange {
        snp: String,
        risk: usize,
        genotype: String,
        risk_allele: String,
    },

    #[error("Unsupported risk allele {risk_allele:?} for SNP {snp}")]
    UnsupportedRiskAllele { snp: String, risk_allele: String },

    #[error(
        "Malformed treatment application {application:?} for SNP {snp}: expected <marker>_<medication>_<response>"
    )]
    MalformedApplication { snp: String, application: String },

    #[error("Application {application:?} for SNP {snp} can't be scored by this condition")]
    UnsupportedApplication { snp: String, application: String },
}

impl ScanError {
    /// The SNP the error is attached to.
    pub fn snp(&self) -> &str {
        match self {
            ScanError::UnrecognizedCall { snp, .. }
            | ScanError::UnsupportedIndel { snp, .. }
            | ScanError::RiskOutOfRange { snp, .. }
            | ScanError::UnsupportedRiskAllele { snp, .. }
            | ScanError::MalformedApplication { snp, .. }
            | ScanError::UnsupportedApplication { snp, .. } => snp,
        }
    }
}

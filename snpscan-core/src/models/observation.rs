use serde::{Deserialize, Serialize};

use crate::errors::ScanError;

///
/// The genotype evidence for one observation, as found in the source file.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenotypeCall {
    /// A two-character genotype string, e.g. `AG`, from a tabular export.
    Literal(String),

    /// A variant record: reference allele, alternate alleles and the `GT` call (e.g. `0/1`).
    Variant {
        reference: String,
        alternates: Vec<String>,
        call: String,
    },
}

///
/// A subject's observed genotype at one SNP.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub snp: String,
    pub call: GenotypeCall,
}

impl Observation {
    pub fn literal(snp: &str, genotype: &str) -> Self {
        Observation {
            snp: snp.to_string(),
            call: GenotypeCall::Literal(genotype.to_string()),
        }
    }

    pub fn variant(snp: &str, reference: &str, alternates: &[&str], call: &str) -> Self {
        Observation {
            snp: snp.to_string(),
            call: GenotypeCall::Variant {
                reference: reference.to_string(),
                alternates: alternates.iter().map(|a| a.to_string()).collect(),
                call: call.to_string(),
            },
        }
    }

    ///
    /// Resolve the observation into a genotype string.
    ///
    /// Literal genotypes are returned as-is. Variant calls must be one of
    /// ref/ref, ref/alt (either order, phased or not) or alt/alt over the first
    /// alternate allele; anything else is an error, as is an alternate allele
    /// whose length differs from the reference (insertions and deletions).
    ///
    pub fn genotype(&self) -> Result<String, ScanError> {
        match &self.call {
            GenotypeCall::Literal(genotype) => Ok(genotype.clone()),
            GenotypeCall::Variant {
                reference,
                alternates,
                call,
            } => {
                let alternate = alternates
                    .first()
                    .map(String::as_str)
                    .filter(|alt| *alt != ".");

                if let Some(alt) = alternate {
                    if alt.len() != reference.len() {
                        return Err(ScanError::UnsupportedIndel {
                            snp: self.snp.clone(),
                            reference: reference.clone(),
                            alternate: alt.to_string(),
                        });
                    }
                }

                let unrecognized = || ScanError::UnrecognizedCall {
                    snp: self.snp.clone(),
                    call: call.clone(),
                };

                let alleles: Vec<&str> = call.split(['/', '|']).collect();
                let (first, second) = match alleles.as_slice() {
                    [first, second] => (*first, *second),
                    _ => return Err(unrecognized()),
                };

                match (first, second, alternate) {
                    ("0", "0", _) => Ok(format!("{}{}", reference, reference)),
                    ("0", "1", Some(alt)) | ("1", "0", Some(alt)) => {
                        Ok(format!("{}{}", reference, alt))
                    }
                    ("1", "1", Some(alt)) => Ok(format!("{}{}", alt, alt)),
                    _ => Err(unrecognized()),
                }
            }
        }
    }
}

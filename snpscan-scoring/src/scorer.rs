//! Per-SNP risk scoring.
//!
//! Every scorer turns one matched row into a risk count, the maximum risk
//! that row could contribute, and an association label. Scorers are pure.

use snpscan_core::consts::*;
use snpscan_core::errors::ScanError;
use snpscan_core::models::{Application, MatchedRow, RowScore};
use snpscan_core::utils::{count_occurrences, reversed};

///
/// Count risk alleles in the row's genotype, rejecting an empty risk allele
/// and counts above the ploidy.
///
fn risk_allele_count(row: &MatchedRow) -> Result<u8, ScanError> {
    let risk_allele = &row.entry.risk_allele;
    if risk_allele.is_empty() {
        return Err(ScanError::UnsupportedRiskAllele {
            snp: row.entry.snp.clone(),
            risk_allele: risk_allele.clone(),
        });
    }

    let risk = count_occurrences(&row.genotype, risk_allele);

    if risk > MAX_RISK_SINGLE_ALLELE as usize {
        return Err(ScanError::RiskOutOfRange {
            snp: row.entry.snp.clone(),
            risk,
            genotype: row.genotype.clone(),
            risk_allele: risk_allele.clone(),
        });
    }

    Ok(risk as u8)
}

///
/// Score a row as a diagnostic marker.
///
/// Risk is the number of risk alleles in the genotype (0, 1 or 2) and selects
/// "Average risk", "Small increase in risk" or "Increased risk".
///
pub fn score_diagnostic(row: &MatchedRow) -> Result<RowScore, ScanError> {
    let risk = risk_allele_count(row)?;

    Ok(RowScore {
        risk,
        max_risk: MAX_RISK_SINGLE_ALLELE,
        association: ASSOCIATIONS_DIAGNOSIS[risk as usize].to_string(),
    })
}

///
/// Score a row as a treatment response marker for `medication`.
///
/// A single-character risk allele is counted like a diagnostic marker. A
/// two-character risk allele is a combined genotype that must match the
/// observed genotype in either order, and contributes at most 1.
///
pub fn score_treatment(
    row: &MatchedRow,
    medication: &str,
    response: &str,
) -> Result<RowScore, ScanError> {
    let risk_allele = &row.entry.risk_allele;

    let (risk, max_risk) = match risk_allele.chars().count() {
        1 => (risk_allele_count(row)?, MAX_RISK_SINGLE_ALLELE),
        2 => {
            let matched = *risk_allele == row.genotype || *risk_allele == reversed(&row.genotype);
            (matched as u8, MAX_RISK_COMBINED_ALLELE)
        }
        _ => {
            return Err(ScanError::UnsupportedRiskAllele {
                snp: row.entry.snp.clone(),
                risk_allele: risk_allele.clone(),
            });
        }
    };

    let response = if risk > 0 { response } else { UNKNOWN_RESPONSE };
    Ok(RowScore {
        risk,
        max_risk,
        association: format!("{} {} for {}", response, CLINICAL_RESPONSE, medication),
    })
}

///
/// Score a row according to its application label: diagnostic markers with
/// [score_diagnostic], treatment markers with [score_treatment].
///
pub fn score_by_application(row: &MatchedRow) -> Result<RowScore, ScanError> {
    match row.entry.parsed_application()? {
        Application::Diagnosis => score_diagnostic(row),
        Application::Treatment {
            medication,
            response,
        } => score_treatment(row, &medication, &response),
        Application::Other(application) => Err(ScanError::UnsupportedApplication {
            snp: row.entry.snp.clone(),
            application,
        }),
    }
}

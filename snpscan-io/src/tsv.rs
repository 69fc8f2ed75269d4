//! Tab separated genotype exports.
//!
//! Vendor exports carry one SNP per line with no header row:
//!
//! | rsid      | chromosome | position | genotype |
//! |-----------|------------|----------|----------|
//! | rs1801133 | 1          | 11856378 | AG       |
//!
//! Lines starting with `#` are comments.

use std::io::BufRead;

use log::warn;

use snpscan_core::models::Observation;

use crate::error::Result;

pub const TSV_SNP_COLUMN: usize = 0;
pub const TSV_GENOTYPE_COLUMN: usize = 3;

///
/// Parse a tab separated genotype export into observations.
///
/// Rows with fewer than four columns are skipped with a warning.
///
pub fn parse_tsv_genotypes<R: BufRead>(reader: R) -> Result<Vec<Observation>> {
    let mut observations = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() <= TSV_GENOTYPE_COLUMN {
            warn!(
                "Line {} has {} fields (expected at least {}), skipping",
                index + 1,
                fields.len(),
                TSV_GENOTYPE_COLUMN + 1
            );
            continue;
        }

        observations.push(Observation::literal(
            fields[TSV_SNP_COLUMN].trim(),
            fields[TSV_GENOTYPE_COLUMN].trim(),
        ));
    }

    Ok(observations)
}

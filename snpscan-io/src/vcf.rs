//! VCF parsing into genotype observations.
//!
//! Reads a VCF file (plain text or gzipped/bgzf) and keeps, per record, the
//! identifier, reference and alternate alleles and the first sample's `GT`
//! call. Calls are resolved into genotype strings only when a record is matched.

use std::io::BufRead;
use std::path::Path;

use anyhow::Context;

use snpscan_core::models::Observation;
use snpscan_core::utils::get_dynamic_reader;

use crate::error::{ReadError, Result};

const VCF_ID: usize = 2;
const VCF_REF: usize = 3;
const VCF_ALT: usize = 4;
const VCF_FORMAT: usize = 8;
const VCF_FIRST_SAMPLE: usize = 9;

const MISSING: &str = ".";

///
/// Parse VCF records into observations.
///
/// Records without an identifier (`.`) are ignored. A record listing several
/// identifiers (`rs1;rs2`) yields one observation per identifier. A missing
/// `GT` field is kept as a missing call and surfaces as an error only if the
/// record is matched.
///
pub fn parse_vcf_genotypes<R: BufRead>(mut reader: R) -> Result<Vec<Observation>> {
    let mut observations = Vec::new();
    let mut line_buf = String::new();
    let mut line_num = 0;

    loop {
        line_buf.clear();
        if reader.read_line(&mut line_buf)? == 0 {
            break;
        }
        line_num += 1;

        let line = line_buf.trim_end_matches('\n').trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.splitn(VCF_FIRST_SAMPLE + 2, '\t').collect();
        if fields.len() <= VCF_FIRST_SAMPLE {
            return Err(ReadError::MalformedVcf {
                line: line_num,
                reason: format!(
                    "expected at least {} columns including a sample, found {}",
                    VCF_FIRST_SAMPLE + 1,
                    fields.len()
                ),
            });
        }

        let id_field = fields[VCF_ID];
        if id_field == MISSING {
            continue;
        }

        let reference = fields[VCF_REF];
        let alternates: Vec<&str> = fields[VCF_ALT].split(',').collect();
        let call = genotype_field(fields[VCF_FORMAT], fields[VCF_FIRST_SAMPLE]);

        for snp in id_field.split(';').filter(|id| !id.is_empty()) {
            observations.push(Observation::variant(snp, reference, &alternates, call));
        }
    }

    Ok(observations)
}

/// Pull the `GT` value out of a sample column using the FORMAT column's layout.
fn genotype_field<'a>(format: &str, sample: &'a str) -> &'a str {
    format
        .split(':')
        .position(|key| key == "GT")
        .and_then(|idx| sample.split(':').nth(idx))
        .unwrap_or(MISSING)
}

///
/// Read every observation from a VCF file on disk.
///
pub fn read_vcf_genotypes(path: &Path) -> anyhow::Result<Vec<Observation>> {
    let reader = get_dynamic_reader(path)?;
    let observations =
        parse_vcf_genotypes(reader).with_context(|| format!("Failed to parse VCF: {:?}", path))?;
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn vcf() -> String {
        [
            "##fileformat=VCFv4.2",
            "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE",
            "1\t11856378\trs1801133\tG\tA\t50\tPASS\t.\tGT:DP\t0/1:31",
            "22\t19951271\trs4680\tG\tA\t50\tPASS\t.\tDP:GT\t12:1|1",
            "2\t100\t.\tC\tT\t50\tPASS\t.\tGT\t0/1",
            "3\t200\trs10;rs11\tC\tT,G\t50\tPASS\t.\tGT\t0/0",
            "4\t300\trs12\tC\tT\t50\tPASS\t.\tDP\t7",
        ]
        .join("\n")
    }

    #[rstest]
    fn test_parse_vcf_genotypes(vcf: String) {
        let observations = parse_vcf_genotypes(vcf.as_bytes()).unwrap();

        assert_eq!(
            observations,
            vec![
                Observation::variant("rs1801133", "G", &["A"], "0/1"),
                Observation::variant("rs4680", "G", &["A"], "1|1"),
                Observation::variant("rs10", "C", &["T", "G"], "0/0"),
                Observation::variant("rs11", "C", &["T", "G"], "0/0"),
                Observation::variant("rs12", "C", &["T"], "."),
            ]
        );
        assert_eq!(observations[0].genotype().unwrap(), "GA");
        assert_eq!(observations[1].genotype().unwrap(), "AA");
        assert!(observations[4].genotype().is_err());
    }

    #[rstest]
    fn test_sites_only_vcf_rejected() {
        let vcf = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n1\t100\trs1\tA\tG\t.\tPASS\t.\n";
        let err = parse_vcf_genotypes(vcf.as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::MalformedVcf { line: 2, .. }));
    }
}

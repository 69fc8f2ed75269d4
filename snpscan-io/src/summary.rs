use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use snpscan_core::models::ConditionSummary;

use crate::error::Result;

///
/// Write a condition summary to disk as pretty printed JSON.
///
pub fn write_summary_json<T: AsRef<Path>>(summary: &ConditionSummary, path: T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    write_summary(summary, File::create(path)?)
}

///
/// Write a condition summary as pretty printed JSON to any writer.
///
pub fn write_summary<W: Write>(summary: &ConditionSummary, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush()?;

    Ok(())
}

///
/// Read a condition summary previously written with [write_summary_json].
///
pub fn read_summary_json<T: AsRef<Path>>(path: T) -> Result<ConditionSummary> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use snpscan_core::models::{GroupScore, RowFault, Verdict};

    #[test]
    fn test_summary_round_trip() {
        let summary = ConditionSummary {
            condition: "Spondyloarthritis".to_string(),
            scores: vec![
                GroupScore {
                    key: "diagnostic_score".to_string(),
                    name: "Diagnostic".to_string(),
                    verdict: Verdict::SmallIncrease,
                    relative_risk: Some(0.5),
                    rows: 2,
                    qualifier: String::new(),
                },
                GroupScore {
                    key: "mtx_treatment_score".to_string(),
                    name: "Methotrexate treatment".to_string(),
                    verdict: Verdict::InsufficientData,
                    relative_risk: None,
                    rows: 0,
                    qualifier: " for positive clinical response".to_string(),
                },
            ],
            data: vec![],
            faults: vec![RowFault {
                snp: "rs1".to_string(),
                error: "Unrecognized genotype call \"./.\" for SNP rs1".to_string(),
            }],
        };

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("summary.json");

        write_summary_json(&summary, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"verdict\": \"Small increase in risk\""));

        let restored = read_summary_json(&path).unwrap();
        assert_eq!(restored, summary);
    }
}

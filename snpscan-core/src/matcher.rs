//! Join the curated SNP database against a subject's observations.

use std::collections::HashMap;

use log::{debug, info};

use crate::models::{MatchedRow, Observation, ReferenceEntry, RowFault};

///
/// Observations grouped by SNP identifier.
///
pub struct ObservationIndex<'a> {
    by_snp: HashMap<&'a str, Vec<&'a Observation>>,
}

impl<'a> ObservationIndex<'a> {
    pub fn new(observations: &'a [Observation]) -> Self {
        let mut by_snp: HashMap<&'a str, Vec<&'a Observation>> = HashMap::new();
        for observation in observations {
            by_snp
                .entry(observation.snp.as_str())
                .or_default()
                .push(observation);
        }
        ObservationIndex { by_snp }
    }

    /// The observation for `snp`, only if it is the sole one.
    pub fn unique(&self, snp: &str) -> Option<&'a Observation> {
        match self.by_snp.get(snp).map(Vec::as_slice) {
            Some([observation]) => Some(*observation),
            _ => None,
        }
    }

    pub fn count(&self, snp: &str) -> usize {
        self.by_snp.get(snp).map_or(0, Vec::len)
    }
}

/// Progress of a scan, reported once per reference entry.
#[derive(Debug, Clone, Copy)]
pub struct ScanProgress<'a> {
    pub index: usize,
    pub total: usize,
    pub snp: &'a str,
    pub found: bool,
}

#[derive(Debug, Default)]
pub struct MatchReport {
    pub rows: Vec<MatchedRow>,
    pub faults: Vec<RowFault>,
}

impl MatchReport {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

///
/// Match every reference entry against the observations.
///
/// # Arguments
/// - entries: the curated database, in output order
/// - observations: the subject's genotype table
///
pub fn match_snps(entries: &[ReferenceEntry], observations: &[Observation]) -> MatchReport {
    match_snps_with_progress(entries, observations, |_| {})
}

///
/// Match every reference entry against the observations, reporting each entry scanned.
///
/// An entry yields a row only when exactly one observation carries its SNP
/// identifier. Absent and ambiguous identifiers are skipped. A unique
/// observation whose genotype can't be resolved becomes a fault for that SNP.
///
pub fn match_snps_with_progress<F>(
    entries: &[ReferenceEntry],
    observations: &[Observation],
    mut on_entry: F,
) -> MatchReport
where
    F: FnMut(&ScanProgress),
{
    let index = ObservationIndex::new(observations);
    let total = entries.len();
    let mut report = MatchReport::default();

    for (i, entry) in entries.iter().enumerate() {
        debug!("Scanning for SNP {} ({} out of {})", entry.snp, i + 1, total);

        let found = match index.unique(&entry.snp) {
            Some(observation) => {
                match observation.genotype() {
                    Ok(genotype) => {
                        info!("Found SNP {}", entry.snp);
                        report.rows.push(MatchedRow::new(entry.clone(), &genotype));
                    }
                    Err(err) => {
                        info!("Found SNP {} but its genotype is unusable: {}", entry.snp, err);
                        report.faults.push(RowFault::new(&err));
                    }
                }
                true
            }
            None => {
                let count = index.count(&entry.snp);
                if count > 1 {
                    debug!("Skipping SNP {}: {} ambiguous observations", entry.snp, count);
                }
                false
            }
        };

        on_entry(&ScanProgress {
            index: i,
            total,
            snp: &entry.snp,
            found,
        });
    }

    report
}

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use anyhow::Context;
use log::debug;
use zip::ZipArchive;

use snpscan_core::models::Observation;

use crate::error::Result;
use crate::tsv::parse_tsv_genotypes;

///
/// Read every non-empty member of a ZIP archive as a tab separated genotype
/// export and concatenate the observations in archive order.
///
pub fn parse_zip_genotypes<R: Read + Seek>(reader: R) -> Result<Vec<Observation>> {
    let mut archive = ZipArchive::new(reader)?;
    let mut observations = Vec::new();

    for i in 0..archive.len() {
        let member = archive.by_index(i)?;
        if member.is_dir() || member.compressed_size() == 0 {
            continue;
        }

        debug!("Reading archive member {}", member.name());
        observations.extend(parse_tsv_genotypes(BufReader::new(member))?);
    }

    Ok(observations)
}

///
/// Read every observation from a ZIP archive on disk.
///
pub fn read_zip_genotypes(path: &Path) -> anyhow::Result<Vec<Observation>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let observations = parse_zip_genotypes(BufReader::new(file))
        .with_context(|| format!("Failed to read ZIP archive: {:?}", path))?;
    Ok(observations)
}

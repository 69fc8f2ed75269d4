use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use log::info;

use snpscan_core::models::ReferenceEntry;
use snpscan_core::utils::get_dynamic_reader;

use crate::error::ReadError;

///
/// Parse a curated SNP database from CSV with a header row.
///
/// Columns are matched by header name; unknown columns are ignored and
/// empty cells read as empty strings. Rows without a SNP identifier are dropped.
///
pub fn parse_snp_db<R: Read>(reader: R) -> std::result::Result<Vec<ReferenceEntry>, ReadError> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for result in csv_reader.deserialize() {
        let entry: ReferenceEntry = result?;
        if entry.snp.is_empty() {
            continue;
        }
        entries.push(entry);
    }

    Ok(entries)
}

///
/// Load the curated SNP database from disk.
///
/// # Arguments
/// - path: path to the database CSV (optionally gzipped)
///
pub fn read_snp_db(path: &Path) -> Result<Vec<ReferenceEntry>> {
    let reader = get_dynamic_reader(path)?;
    let entries = parse_snp_db(reader)
        .with_context(|| format!("Failed to parse SNP database: {:?}", path))?;

    info!("Loaded {} SNPs from database {:?}", entries.len(), path);

    Ok(entries)
}

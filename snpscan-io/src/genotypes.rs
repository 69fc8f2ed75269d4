use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use snpscan_core::models::Observation;
use snpscan_core::utils::get_dynamic_reader;

use crate::archive::read_zip_genotypes;
use crate::format::GenotypeFormat;
use crate::tsv::parse_tsv_genotypes;
use crate::vcf::read_vcf_genotypes;

///
/// Read a subject's genotype table from disk.
///
/// # Arguments
/// - path: path to the genotype file
/// - format: explicit format, or `None` to derive it from the file name
///
pub fn read_genotypes(path: &Path, format: Option<GenotypeFormat>) -> Result<Vec<Observation>> {
    let format = match format {
        Some(format) => format,
        None => GenotypeFormat::from_path(path)?,
    };

    let observations = match format {
        GenotypeFormat::Vcf => read_vcf_genotypes(path)?,
        GenotypeFormat::Zip => read_zip_genotypes(path)?,
        GenotypeFormat::Tsv => {
            let reader = get_dynamic_reader(path)?;
            parse_tsv_genotypes(reader)
                .with_context(|| format!("Failed to parse genotype file: {:?}", path))?
        }
    };

    info!(
        "Loaded {} genotype observations from {:?} ({})",
        observations.len(),
        path,
        format
    );

    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_read_gzipped_tsv() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("genome.txt.gz");

        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"rs1\t1\t100\tAG\n").unwrap();
        encoder.finish().unwrap();

        let observations = read_genotypes(&path, None).unwrap();
        assert_eq!(observations, vec![Observation::literal("rs1", "AG")]);
    }

    #[rstest]
    fn test_explicit_format_overrides_extension() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("genome.dat");
        std::fs::write(&path, "rs1\t1\t100\tAG\n").unwrap();

        assert!(read_genotypes(&path, None).is_err());
        let observations = read_genotypes(&path, Some(GenotypeFormat::Tsv)).unwrap();
        assert_eq!(observations.len(), 1);
    }

    #[rstest]
    fn test_missing_file_names_path() {
        let err = read_genotypes(Path::new("missing/genome.vcf"), None).unwrap_err();
        assert!(format!("{:?}", err).contains("missing/genome.vcf"));
    }
}

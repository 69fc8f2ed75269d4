use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ReadError;

///
/// The kinds of genotype file snpscan can read.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenotypeFormat {
    /// Variant call format, plain or gzip/bgzf compressed.
    Vcf,
    /// Headerless tab separated export: SNP id in column 0, genotype in column 3.
    Tsv,
    /// ZIP archive of tab separated exports.
    Zip,
}

impl FromStr for GenotypeFormat {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vcf" => Ok(GenotypeFormat::Vcf),
            "tsv" | "txt" => Ok(GenotypeFormat::Tsv),
            "zip" => Ok(GenotypeFormat::Zip),
            _ => Err(ReadError::UnknownFormat(s.to_string())),
        }
    }
}

impl Display for GenotypeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenotypeFormat::Vcf => "vcf",
            GenotypeFormat::Tsv => "tsv",
            GenotypeFormat::Zip => "zip",
        };
        write!(f, "{}", name)
    }
}

impl GenotypeFormat {
    ///
    /// Derive the format from a file name, looking through a trailing `.gz`/`.bgz`.
    ///
    pub fn from_path(path: &Path) -> Result<Self, ReadError> {
        let unknown = || ReadError::UnknownFormat(path.display().to_string());

        let filename = path.file_name().and_then(|f| f.to_str()).ok_or_else(unknown)?;
        let base = filename
            .strip_suffix(".gz")
            .or_else(|| filename.strip_suffix(".bgz"))
            .unwrap_or(filename);

        let ext = PathBuf::from(base)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_string)
            .ok_or_else(unknown)?;

        GenotypeFormat::from_str(&ext).map_err(|_| unknown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("sample.vcf", GenotypeFormat::Vcf)]
    #[case("sample.vcf.gz", GenotypeFormat::Vcf)]
    #[case("sample.vcf.bgz", GenotypeFormat::Vcf)]
    #[case("genome_v5.txt", GenotypeFormat::Tsv)]
    #[case("genome.tsv.gz", GenotypeFormat::Tsv)]
    #[case("export.ZIP", GenotypeFormat::Zip)]
    fn test_format_from_path(#[case] path: &str, #[case] expected: GenotypeFormat) {
        assert_eq!(GenotypeFormat::from_path(Path::new(path)).unwrap(), expected);
    }

    #[rstest]
    #[case("genome")]
    #[case("genome.bam")]
    #[case("genome.csv")]
    #[case("genome.gz")]
    fn test_unknown_format(#[case] path: &str) {
        assert!(matches!(
            GenotypeFormat::from_path(Path::new(path)),
            Err(ReadError::UnknownFormat(_))
        ));
    }

    #[rstest]
    fn test_comma_separated_is_not_tab_separated() {
        assert!(GenotypeFormat::from_str("csv").is_err());
        assert_eq!(GenotypeFormat::from_str("TXT").unwrap(), GenotypeFormat::Tsv);
    }
}

use std::io;
use thiserror::Error;

/// Error type for snpscan-io operations.
#[derive(Error, Debug)]
pub enum ReadError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The reference database could not be parsed.
    #[error("Invalid SNP database: {0}")]
    Database(#[from] csv::Error),

    /// A ZIP archive could not be opened or a member could not be read.
    #[error("Invalid ZIP archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The genotype file format could not be derived from the file name.
    #[error("Can't determine genotype file format for {0:?}, expected .vcf, .txt, .tsv or .zip")]
    UnknownFormat(String),

    /// A VCF data line is missing required columns.
    #[error("Malformed VCF line {line}: {reason}")]
    MalformedVcf { line: usize, reason: String },

    /// The summary JSON could not be read or written.
    #[error("Invalid summary JSON: {0}")]
    Summary(#[from] serde_json::Error),
}

/// Result type alias for snpscan-io operations.
pub type Result<T> = std::result::Result<T, ReadError>;

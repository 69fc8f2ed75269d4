use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tabled::builder::Builder;
use tabled::settings::Style;

use snpscan_core::consts::RESULT_COLUMNS;
use snpscan_core::models::ScoredRow;

use crate::error::Result;

///
/// The result columns left after removing a condition's dropped columns.
///
pub fn visible_columns(dropped: &[&str]) -> Vec<&'static str> {
    RESULT_COLUMNS
        .iter()
        .copied()
        .filter(|column| !dropped.contains(column))
        .collect()
}

pub trait ResultWrite {
    ///
    /// Write the result table to disk as a tab separated file with a header row.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    /// - dropped: result columns to leave out
    fn write_results_tsv<T: AsRef<Path>>(&self, path: T, dropped: &[&str]) -> Result<()>;

    ///
    /// Write the result table as tab separated values to any writer.
    ///
    /// # Arguments
    /// - writer: the destination, e.g. an already opened file
    /// - dropped: result columns to leave out
    fn write_results<W: Write>(&self, writer: W, dropped: &[&str]) -> Result<()>;

    ///
    /// Render the result table as a markdown table for the console.
    ///
    /// # Arguments
    /// - dropped: result columns to leave out
    fn results_table(&self, dropped: &[&str]) -> String;
}

impl ResultWrite for [ScoredRow] {
    fn write_results_tsv<T: AsRef<Path>>(&self, path: T, dropped: &[&str]) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.write_results(std::fs::File::create(path)?, dropped)
    }

    fn write_results<W: Write>(&self, writer: W, dropped: &[&str]) -> Result<()> {
        let columns = visible_columns(dropped);
        let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(writer);

        writer.write_record(&columns)?;
        for row in self {
            writer.write_record(columns.iter().map(|c| row.column(c).unwrap_or_default()))?;
        }

        writer.flush()?;
        Ok(())
    }

    fn results_table(&self, dropped: &[&str]) -> String {
        let columns = visible_columns(dropped);
        let mut builder = Builder::default();

        builder.push_record(columns.iter().copied());
        for row in self {
            builder.push_record(columns.iter().map(|c| row.column(c).unwrap_or_default()));
        }

        let mut table = builder.build();
        table.with(Style::markdown());
        table.to_string()
    }
}

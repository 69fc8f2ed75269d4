use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use snpscan_core::matcher::match_snps_with_progress;
use snpscan_io::{GenotypeFormat, ResultWrite, read_genotypes, read_snp_db, write_summary};
use snpscan_scoring::consts::DEFAULT_CONDITION;
use snpscan_scoring::{condition_from_key, summarize_condition};

use super::cli::{DEFAULT_JSON, DEFAULT_OUTPUT};
use crate::config::ScanConfig;

///
/// Everything a scan needs, with command line flags layered over the config
/// file and built-in defaults.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub condition: String,
    pub database: Option<PathBuf>,
    pub genotypes: PathBuf,
    pub format: Option<GenotypeFormat>,
    pub output: PathBuf,
    pub json: PathBuf,
}

impl ScanSettings {
    pub fn resolve(matches: &ArgMatches) -> Result<Self> {
        let config = match matches.get_one::<String>("config") {
            Some(path) => ScanConfig::from_file(Path::new(path))?,
            None => ScanConfig::default(),
        };

        let flag = |name: &str| matches.get_one::<String>(name).cloned();

        let condition = flag("condition")
            .or(config.condition)
            .unwrap_or_else(|| DEFAULT_CONDITION.to_string());

        let genotypes = match flag("genotypes").map(PathBuf::from).or(config.genotypes) {
            Some(path) => path,
            None => anyhow::bail!(
                "A path to a genotype file is required, either as an argument or in the config."
            ),
        };

        let format = match flag("format").or(config.format) {
            Some(format) => match GenotypeFormat::from_str(&format) {
                Ok(format) => Some(format),
                Err(_err) => anyhow::bail!("Unknown genotype format supplied: {}", format),
            },
            None => None,
        };

        Ok(ScanSettings {
            condition,
            database: flag("db").map(PathBuf::from).or(config.database),
            genotypes,
            format,
            output: flag("output")
                .map(PathBuf::from)
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            json: flag("json")
                .map(PathBuf::from)
                .or(config.json)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_JSON)),
        })
    }
}

fn create_output(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory for {:?}", path))?;
    }
    File::create(path).with_context(|| format!("Failed to create output file {:?}", path))
}

///
/// Open the results and summary destinations. If the second can't be opened,
/// the first is removed again so a failed run leaves no output behind.
///
pub fn open_outputs(results: &Path, summary: &Path) -> Result<(File, File)> {
    let results_file = create_output(results)?;
    match create_output(summary) {
        Ok(summary_file) => Ok((results_file, summary_file)),
        Err(err) => {
            drop(results_file);
            if let Err(remove_err) = std::fs::remove_file(results) {
                warn!("Failed to remove {:?}: {}", results, remove_err);
            }
            Err(err)
        }
    }
}

pub fn run_scan(matches: &ArgMatches) -> Result<()> {
    let settings = ScanSettings::resolve(matches)?;
    let condition = condition_from_key(&settings.condition)?;

    let database = match &settings.database {
        Some(database) => database.clone(),
        None => {
            let default = PathBuf::from(condition.default_database());
            if !default.exists() {
                anyhow::bail!(
                    "No SNP database given and the default {:?} for {} was not found. Pass one with --db or set `database` in the config.",
                    default,
                    condition.name()
                );
            }
            default
        }
    };

    // read both inputs before producing anything
    let entries = read_snp_db(&database)?;
    let observations = read_genotypes(&settings.genotypes, settings.format)?;

    info!(
        "Scanning {} for {} SNPs of {}",
        settings.genotypes.display(),
        entries.len(),
        condition.name()
    );

    let bar = ProgressBar::new(entries.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    let report = match_snps_with_progress(&entries, &observations, |progress| {
        bar.set_message(progress.snp.to_string());
        bar.inc(1);
    });
    bar.finish_with_message(format!("{} SNPs found", report.len()));

    let summary = summarize_condition(condition.as_ref(), report);

    println!();
    for score in &summary.scores {
        println!("Your {} insights: {}", score.name, score.insight());
    }
    println!();
    println!("{}", summary.data.results_table(condition.dropped_columns()));

    // both destinations are opened before either is written
    let (results_file, summary_file) = open_outputs(&settings.output, &settings.json)?;

    summary
        .data
        .write_results(results_file, condition.dropped_columns())
        .with_context(|| format!("Failed to write results to {:?}", settings.output))?;
    write_summary(&summary, summary_file)
        .with_context(|| format!("Failed to write summary to {:?}", settings.json))?;

    info!(
        "Wrote {} and {}",
        settings.output.display(),
        settings.json.display()
    );

    Ok(())
}

use clap::{Arg, Command, arg};

pub const SCAN_CMD: &str = "scan";
pub const DEFAULT_OUTPUT: &str = "results.tsv";
pub const DEFAULT_JSON: &str = "results.json";

pub fn create_scan_cli() -> Command {
    Command::new(SCAN_CMD)
        .about("Scan a genotype file against a condition's SNP database and report its risk.")
        .arg(Arg::new("genotypes").help("Genotype file (.vcf, tab separated .txt/.tsv or .zip, optionally gzipped)"))
        .arg(arg!(--db <db>).help("Curated SNP database (CSV). Defaults to db/snpdb_<condition>.csv, which is not shipped and must be provided"))
        .arg(arg!(--condition <condition>).help("Condition to report on (see `snpscan conditions`)"))
        .arg(arg!(--config <config>).help("TOML or YAML file with scan settings"))
        .arg(arg!(--format <format>).help("Genotype file format: vcf, tsv or zip. Derived from the file name by default"))
        .arg(arg!(--output <output>).help("Path to write the results table to"))
        .arg(arg!(--json <json>).help("Path to write the JSON summary to"))
}

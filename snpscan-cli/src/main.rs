mod conditions;
mod config;
mod scan;

use anyhow::Result;
use clap::Command;
use env_logger::{Builder, Env};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "snpscan";
    pub const BIN_NAME: &str = "snpscan";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Match a personal genotype table against curated SNP databases and summarize condition risk.")
        .subcommand_required(true)
        .subcommand(scan::cli::create_scan_cli())
        .subcommand(conditions::cli::create_conditions_cli())
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SCAN
        //
        Some((scan::cli::SCAN_CMD, matches)) => {
            scan::handlers::run_scan(matches)?;
        }

        //
        // CONDITIONS
        //
        Some((conditions::cli::CONDITIONS_CMD, matches)) => {
            conditions::handlers::run_conditions(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

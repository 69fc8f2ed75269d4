use anyhow::Result;
use clap::ArgMatches;

use snpscan_scoring::available_conditions;
use snpscan_scoring::consts::DEFAULT_CONDITION;

pub fn run_conditions(_matches: &ArgMatches) -> Result<()> {
    for condition in available_conditions() {
        let default = if condition.key() == DEFAULT_CONDITION {
            " (default)"
        } else {
            ""
        };
        println!(
            "{}\t{}\t{}{}",
            condition.key(),
            condition.name(),
            condition.default_database(),
            default
        );
    }

    Ok(())
}

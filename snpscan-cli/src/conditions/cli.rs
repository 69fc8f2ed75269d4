use clap::Command;

pub const CONDITIONS_CMD: &str = "conditions";

pub fn create_conditions_cli() -> Command {
    Command::new(CONDITIONS_CMD).about("List the conditions that can be scanned for.")
}

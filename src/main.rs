use catchlog::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("catchlog - Best conditions from your fishing log");
    println!("================================================");
    println!();
    println!("Reads a catch-log CSV export and ranks, for each species, the location,");
    println!("bait, moon phase, tide, time of day and weather with the most catches.");
    println!();
    println!("USAGE:");
    println!("    catchlog <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    species     List species found in the catch log");
    println!("    recommend   Best-conditions summary for one or all species");
    println!("    stats       Dataset overview and data quality report");
    println!("    refresh     Reload the catch log and replace the cached snapshot");
    println!("    cache       Show snapshot status (--clear to delete it)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -i, --input <CSV>        Catch-log CSV file");
    println!("    -c, --config <FILE>      Configuration file (TOML)");
    println!("        --offline            Use only the cached snapshot");
    println!("        --format <FORMAT>    human, json or csv");
    println!("    -h, --help               Show help information");
    println!("    -V, --version            Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    catchlog recommend -i catches.csv --species Sailfish");
    println!("    catchlog recommend --all --format csv");
    println!("    catchlog stats --offline");
    println!();
    println!("For detailed help on a specific command, use:");
    println!("    catchlog <COMMAND> --help");
}

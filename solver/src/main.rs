use std::process::ExitCode;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::LevelFilter;

use snaking::{string_permutations, Grid, PathSearcher};

/// Snaking word search and permutation listing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look for TARGET as a path of up/down/left/right steps through the grid given by ROWS
    Search {
        target: String,
        /// Grid rows, top to bottom; all must be the same length
        #[arg(required = true)]
        rows: Vec<String>,
    },
    /// List orderings of the characters of SYMBOLS, one per line
    Permute {
        symbols: String,
        /// Stop after this many orderings
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_target(false);

    // RUST_LOG wins over --verbose
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Search { target, rows } => {
            let grid = Grid::from_rows(&rows)?;
            log::debug!("searching in\n{grid}");

            match PathSearcher::from(&grid).find(&target) {
                Some(path) => {
                    println!("found {target}: {path}");
                    println!("steps: {}", path.steps().iter().map(|step| format!("{step:?}")).join(", "));
                }
                None => println!("not found"),
            }
        }
        Command::Permute { symbols, limit } => {
            for permutation in string_permutations(&symbols).take(limit.unwrap_or(usize::MAX)) {
                println!("{permutation}");
            }
        }
    }

    Ok(())
}

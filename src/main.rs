//! BowlAI - bowling action analysis in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::io;
use std::path::PathBuf;

use bowlai::headless;
use bowlai::TuiOptions;
use bowlai_core::prelude::*;
use bowlai_core::{DateRange, HistoryFilter, StatusFilter, SystemClock};
use clap::{Parser, Subcommand};

/// BowlAI - bowling action analysis in the terminal
#[derive(Parser, Debug)]
#[command(name = "bowlai", version)]
#[command(about = "Bowling action analysis in the terminal", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Page to open first, e.g. /history or /analysis/3
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Start in the light theme
    #[arg(long)]
    light: bool,

    /// Settings file (defaults to <config dir>/bowlai/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Headless commands (JSON lines on stdout, no TUI)
#[derive(Subcommand, Debug)]
enum Command {
    /// List past analyses
    History {
        /// all, legal or review
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// all, week or month
        #[arg(long, default_value = "all")]
        range: DateRange,

        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Check a video file against the upload rules
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the detailed report for an analysis id
    Report {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let Some(command) = args.command else {
        return bowlai::run_tui(TuiOptions {
            route: args.route,
            light: args.light,
            config: args.config,
        })
        .await;
    };

    bowlai::init_headless()?;

    let mut stdout = io::stdout().lock();
    match command {
        Command::History {
            status,
            range,
            search,
        } => {
            let filter = HistoryFilter {
                status,
                range,
                search,
            };
            headless::print_history(&filter, &SystemClock, &mut stdout);
        }
        Command::Validate { file } => {
            if !headless::validate_path(&file, &mut stdout) {
                std::process::exit(1);
            }
        }
        Command::Report { id } => headless::print_report(&id, &mut stdout),
    }
    Ok(())
}

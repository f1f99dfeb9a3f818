//! tabmon - live resource monitor for the terminal.
//!
//! Usage:
//!   tabmon                          # monitor, no logging
//!   tabmon --log-file tabmon.log    # log at info level to a file
//!   tabmon --log-file t.log -vv     # trace level

use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use tabmon::collector::Collector;
use tabmon::config::{init_logging, Config, TICK_RATE};
use tabmon::tui::App;

/// Live CPU, memory, disk and process monitor.
#[derive(Parser)]
#[command(name = "tabmon", about = "Terminal resource monitor", version)]
struct Args {
    /// Write logs to this file. The terminal is used by the UI, so logs are
    /// discarded unless a file is given.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            tick_rate: TICK_RATE,
            log_file: args.log_file,
            verbosity: args.verbose,
        }
    }
}

fn main() {
    let config = Config::from(Args::parse());

    if let Err(e) = init_logging(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let app = App::new(Box::new(Collector::new()));
    if let Err(e) = app.run(config.tick_rate) {
        error!(error = %e, "terminal loop failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

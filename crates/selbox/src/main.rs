// Author: Dustin Pilgrim
// License: MIT

mod cli;
mod config;
mod logging;
mod paths;
mod print;
mod replay;
mod run;
mod script;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| paths::default_log_path("selbox.log"));

    if let Err(e) = logging::init_logging(&log_path, args.verbose) {
        // logging isn't up yet
        eprintln!("selbox: failed to init logging: {e}");
        std::process::exit(1);
    }

    eventline::info!("selbox starting");
    eventline::debug!("verbose={}", args.verbose);
    eventline::debug!("log_path={}", log_path.display());

    if let Err(e) = run::run(args) {
        eventline::error!("fatal error: {e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

//! Barkit CLI - command-line front end for the Barkit output back end

mod cli;
mod commands;

use barkit::error::BarkitError;
use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = commands::run(cli.command) {
        eprintln!("Error: {:#}", err);
        let code = err.downcast_ref::<BarkitError>().map_or(1, BarkitError::code);
        std::process::exit(code);
    }
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

//! Main entry point for the kepviz CLI.
//!
//! Converts a GRASS GIS vector map into an interactive kepler.gl
//! visualization: assemble the configuration document, export the
//! geometry, render the HTML page, patch in the title.

mod cli;
mod error;
mod export;

use clap::Parser;
use cli::Cli;
use error::CliError;
use kepviz::GrassRuntime;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            if e.use_stderr() {
                let err = CliError::InvalidArguments(e.kind().to_string());
                std::process::exit(err.exit_code());
            }
            // --help and --version land here; they are not errors.
            std::process::exit(0);
        }
    };

    kepviz::init_logger(cli.verbose, cli.quiet);

    let gis = GrassRuntime::new();
    match export::run(&cli, &gis) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

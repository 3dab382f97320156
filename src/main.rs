mod cli;
mod config;
mod document;
mod error;
mod member;
mod report;
mod update_photos;

use clap::Parser;
use cli::Cli;
use config::Config;
use error::UpdateError;
use report::UpdateReport;
use std::env;
use std::error::Error;
use std::io;
use tracing::{warn, Level};
use update_photos::*;

fn main() {
    let _ = Cli::parse();
    // stdout only carries the status line
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(report) => println!("{report}"),
        Err(error) => {
            warn!(cause = ?error.source(), "{error}");
            println!("Terjadi kesalahan: {error}")
        }
    }
}

fn run() -> Result<UpdateReport, UpdateError> {
    let working_directory =
        env::current_dir().map_err(|source| UpdateError::io(".", source))?;
    let config = Config::new(&working_directory);
    update_photos(&config)
}

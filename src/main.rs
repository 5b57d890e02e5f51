//! # massbank-validate
//!
//! A command-line tool for checking MassBank record files.
//!
//! ## Usage
//!
//! ```bash
//! # Validate a directory of records
//! massbank-validate records/
//!
//! # Relaxed checks, JSON output
//! massbank-validate --legacy --json MSBNK-test-TST00001.txt
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::{dispatch, init_logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    dispatch(cli)
}

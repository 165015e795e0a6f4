//! manualpdf binary entry point
//!
//! This is a thin wrapper that calls the library's `run_cli()` function.

use std::process::ExitCode;

use anyhow::Result;
use manualpdf_cli::run_cli;

fn main() -> Result<ExitCode> {
    run_cli()
}

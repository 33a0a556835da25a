//! `emodel`: rate a connection with the ITU-T G.107 E-model
//!
//! Reads the twenty transmission parameters as JSON from a file (`-f`) or
//! standard input (`--stdin`) and prints the rating factor R.
//!
//! Exit codes: 0 success, 1 load or decode failure, 2 usage error,
//! 3 parameter out of range (`--strict` only).

mod config;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use emodel_core::logging::{setup_logging, LoggingConfig};
use emodel_core::{compute_breakdown, load, validate, EmodelError};
use tracing::{debug, info, warn};

use crate::config::{Args, CliConfig};

fn main() -> ExitCode {
    let config = match CliConfig::from_args(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("{}", Args::command().render_usage());
            return ExitCode::from(2);
        }
    };

    if let Err(e) = setup_logging(&LoggingConfig::new(config.log_level, "emodel")) {
        eprintln!("warning: {}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            exit_code_for(&e)
        }
    }
}

/// Load, optionally validate, rate and print one parameter set
fn run<W: Write>(config: &CliConfig, out: &mut W) -> anyhow::Result<()> {
    let params = load(&config.source)
        .with_context(|| format!("Failed to load parameters from {}", config.source))?;
    debug!("Loaded parameters: {:?}", params);

    if config.strict {
        validate(&params).context("Parameters outside the range permitted by G.107")?;
    }

    let breakdown = compute_breakdown(&params);
    if !breakdown.r.is_finite() {
        warn!("Rating is not finite (R = {}); check parameter ranges or use --strict", breakdown.r);
    }
    info!("Rated connection from {}: R = {:.3}", config.source, breakdown.r);

    output::render(out, config.format, config.verbose, &params, &breakdown)?;
    out.flush()?;
    Ok(())
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<EmodelError>() {
        Some(e) if e.is_validation() => ExitCode::from(3),
        _ => ExitCode::from(1),
    }
}

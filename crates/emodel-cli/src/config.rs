//! Command-line arguments and the run configuration built from them

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use emodel_core::logging::parse_log_level;
use emodel_core::{EmodelError, InputSource};
use tracing::Level;

/// Compute the ITU-T G.107 E-model rating (R) of a connection
#[derive(Parser, Debug)]
#[command(name = "emodel", author, version, about, long_about = None)]
pub struct Args {
    /// JSON file with the twenty input parameters
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read the JSON parameters from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Echo the parsed parameters and every intermediate quantity
    #[arg(short, long)]
    pub verbose: bool,

    /// Reject parameters outside the ranges permitted by G.107
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "EMODEL_LOG", default_value = "warn")]
    pub log_level: String,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `R = 93.206208`
    Text,
    /// One JSON object per run
    Json,
}

/// Everything a run needs, resolved from the arguments
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub source: InputSource,
    pub verbose: bool,
    pub strict: bool,
    pub format: OutputFormat,
    pub log_level: Level,
}

impl CliConfig {
    /// Resolve the arguments; `--stdin` wins over `--file`
    pub fn from_args(args: Args) -> emodel_core::Result<Self> {
        let source = if args.stdin {
            InputSource::Stdin
        } else if let Some(path) = args.file {
            InputSource::File(path)
        } else {
            return Err(EmodelError::config("No input source: pass --file <PATH> or --stdin"));
        };

        Ok(Self {
            source,
            verbose: args.verbose,
            strict: args.strict,
            format: args.format,
            log_level: parse_log_level(&args.log_level)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("emodel").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_file_source() {
        let config = CliConfig::from_args(parse(&["-f", "link.json"])).unwrap();
        assert_eq!(config.source, InputSource::File(PathBuf::from("link.json")));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
        assert!(!config.strict);
    }

    #[test]
    fn test_stdin_takes_precedence() {
        let config = CliConfig::from_args(parse(&["--stdin", "--file", "link.json"])).unwrap();
        assert_eq!(config.source, InputSource::Stdin);
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let err = CliConfig::from_args(parse(&["-v"])).unwrap_err();
        assert!(matches!(err, EmodelError::Config(_)));
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::from_args(parse(&[
            "--stdin",
            "-v",
            "--strict",
            "--format",
            "json",
            "--log-level",
            "debug",
        ]))
        .unwrap();
        assert!(config.verbose);
        assert!(config.strict);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = CliConfig::from_args(parse(&["--stdin", "--log-level", "chatty"])).unwrap_err();
        assert!(err.to_string().contains("chatty"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["emodel", "--stdin", "--format", "xml"]).is_err());
    }
}

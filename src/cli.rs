// src/cli.rs
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pulsar_version_domain::{DEFAULT_MARKER, DEFAULT_PATTERN, MarkerPrefix, TargetPattern, VersionString};
use pulsar_version_ports::notify::Verbosity;
use pulsar_version_shared_kernel::{PresentationError, PulsarVersionError};
use pulsar_version_usecase::WriteMode;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "pulsar-version",
    version = crate::VERSION,
    about = "Set the default Pulsar version in the integration test script"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Version to write, used verbatim
    #[arg(id = "new_version", value_name = "VERSION", allow_hyphen_values = true)]
    pub new_version: String,

    /// Glob locating the script, relative to --root
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Text identifying the line to rewrite
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Directory to search from
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Print the rewritten script instead of saving it
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Exit with status 1 if the script is not already at VERSION
    #[arg(long)]
    pub check: bool,

    /// Fail when the pattern matches more than one file
    #[arg(long)]
    pub strict: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report the search and every match
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse CLI arguments and materialise a [`Config`].
pub fn load_config() -> anyhow::Result<Config> {
    build_config(Args::parse())
}

/// Convert parsed CLI arguments into a validated configuration.
pub fn build_config(args: Args) -> anyhow::Result<Config> {
    let marker = MarkerPrefix::new(args.marker.as_str()).map_err(|e| {
        PulsarVersionError::from(PresentationError::InvalidValue {
            flag: "--marker".to_string(),
            value: args.marker.clone(),
            reason: e.to_string(),
        })
    })?;
    let pattern = TargetPattern::new(&args.pattern).context("invalid --pattern")?;

    let mode = if args.dry_run {
        WriteMode::DryRun
    } else if args.check {
        WriteMode::Check
    } else {
        WriteMode::Apply
    };
    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else if args.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    Ok(Config {
        root: args.root,
        pattern,
        marker,
        version: VersionString::new(args.new_version),
        mode,
        strict: args.strict,
        verbosity,
    })
}

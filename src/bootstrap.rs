// src/bootstrap.rs
use std::process::ExitCode;

use anyhow::Result;
use pulsar_version_infra::{ConsoleNotifier, FsScriptStore, GlobTargetLocator};
use pulsar_version_ports::notify::Notifier;
use pulsar_version_usecase::{BumpReport, BumpVersion, WriteMode};

use crate::{cli, config::Config};

pub fn run() -> Result<ExitCode> {
    let config = cli::load_config()?;
    run_with_config(&config)
}

pub fn run_with_config(config: &Config) -> Result<ExitCode> {
    let locator = GlobTargetLocator;
    let store = FsScriptStore;
    let notifier = ConsoleNotifier::new(config.verbosity);
    let command = BumpVersion::new(&locator, &store, Some(&notifier));

    let report = command.run(&config.to_request())?;
    Ok(present(&report, config, &notifier))
}

fn present(report: &BumpReport, config: &Config, notifier: &dyn Notifier) -> ExitCode {
    let target = report.target.display();
    let lines = report
        .outcome
        .replaced_lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");

    match config.mode {
        WriteMode::Apply if report.written => {
            notifier.info(&format!("updated {target}: line {lines} -> {}", config.version.quoted()));
            ExitCode::SUCCESS
        }
        WriteMode::Apply => {
            notifier.info(&format!("unchanged {target}"));
            ExitCode::SUCCESS
        }
        WriteMode::DryRun => {
            print!("{}", report.outcome.content);
            ExitCode::SUCCESS
        }
        WriteMode::Check if !report.outcome.marker_found() => {
            notifier.warn(&format!("{target} has no '{}' line", config.marker));
            ExitCode::FAILURE
        }
        WriteMode::Check if report.outcome.changed => {
            notifier.warn(&format!("{target} is not at {}", config.version.quoted()));
            ExitCode::FAILURE
        }
        WriteMode::Check => {
            notifier.info(&format!("{target} is at {}", config.version.quoted()));
            ExitCode::SUCCESS
        }
    }
}

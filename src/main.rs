// src/main.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    match pulsar_version::bootstrap::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

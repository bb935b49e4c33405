// crates/infra/src/console.rs
use pulsar_version_ports::notify::{Notifier, Verbosity};

/// Writes diagnostics to stderr, filtered by [`Verbosity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    verbosity: Verbosity,
}

impl ConsoleNotifier {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{message}");
        }
    }

    fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("[info] {message}");
        }
    }

    fn warn(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("[warn] {message}");
        }
    }
}

use std::path::PathBuf;

use pulsar_version_domain::rewrite_lines;
use pulsar_version_ports::{
    filesystem::{ScriptStore, TargetLocator},
    notify::Notifier,
};
use pulsar_version_shared_kernel::{ApplicationError, ErrorContext, Result};

use crate::dto::{BumpReport, BumpRequest, WriteMode};

pub struct BumpVersion<'a> {
    locator: &'a dyn TargetLocator,
    store: &'a dyn ScriptStore,
    notifier: Option<&'a dyn Notifier>,
}

impl<'a> BumpVersion<'a> {
    pub fn new(
        locator: &'a dyn TargetLocator,
        store: &'a dyn ScriptStore,
        notifier: Option<&'a dyn Notifier>,
    ) -> Self {
        Self { locator, store, notifier }
    }

    pub fn run(&self, request: &BumpRequest) -> Result<BumpReport> {
        let target = self.resolve(request)?;

        let content = self.store.read(&target)?;
        let outcome = rewrite_lines(&content, &request.marker, &request.version);

        if !outcome.marker_found() {
            self.warn(&format!(
                "no line containing '{}' in {}; file left unchanged",
                request.marker,
                target.display()
            ));
        }

        let written = request.mode == WriteMode::Apply && outcome.changed;
        if written {
            self.store
                .replace(&target, &outcome.content)
                .with_context(|| format!("updating {}", target.display()))?;
        }

        Ok(BumpReport { target, outcome, written })
    }

    fn resolve(&self, request: &BumpRequest) -> Result<PathBuf> {
        self.debug(&format!(
            "searching '{}' under {}",
            request.pattern.pattern(),
            request.root.display()
        ));
        let mut matches = self
            .locator
            .locate(&request.root, &request.pattern)
            .context("searching for the target script")?;
        for path in &matches {
            self.debug(&format!("matched {}", path.display()));
        }

        match matches.len() {
            0 => Err(ApplicationError::TargetNotFound {
                pattern: request.pattern.pattern().to_string(),
                root: request.root.clone(),
            }
            .into()),
            1 => Ok(matches.swap_remove(0)),
            _ if request.strict => Err(ApplicationError::AmbiguousTarget {
                pattern: request.pattern.pattern().to_string(),
                matches,
            }
            .into()),
            n => {
                let first = matches.swap_remove(0);
                self.warn(&format!(
                    "pattern '{}' matched {n} files; using {}",
                    request.pattern.pattern(),
                    first.display()
                ));
                Ok(first)
            }
        }
    }

    fn debug(&self, message: &str) {
        if let Some(n) = self.notifier {
            n.debug(message);
        }
    }

    fn warn(&self, message: &str) {
        if let Some(n) = self.notifier {
            n.warn(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        collections::HashMap,
        path::{Path, PathBuf},
    };

    use pulsar_version_domain::{MarkerPrefix, TargetPattern, VersionString};
    use pulsar_version_shared_kernel::{InfrastructureError, PulsarVersionError};

    use super::*;

    struct StubLocator(Vec<PathBuf>);

    impl TargetLocator for StubLocator {
        fn locate(&self, _root: &Path, _pattern: &TargetPattern) -> Result<Vec<PathBuf>> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        files: RefCell<HashMap<PathBuf, String>>,
        writes: RefCell<usize>,
        fail_writes: bool,
    }

    impl MemoryStore {
        fn with_file(path: &str, content: &str) -> Self {
            let store = Self::default();
            store.files.borrow_mut().insert(PathBuf::from(path), content.to_string());
            store
        }

        fn content(&self, path: &str) -> String {
            self.files.borrow()[Path::new(path)].clone()
        }
    }

    impl ScriptStore for MemoryStore {
        fn read(&self, path: &Path) -> Result<String> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                InfrastructureError::FileRead {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }
                .into()
            })
        }

        fn replace(&self, path: &Path, content: &str) -> Result<()> {
            if self.fail_writes {
                return Err(InfrastructureError::FileWrite {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                }
                .into());
            }
            *self.writes.borrow_mut() += 1;
            self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        warnings: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn info(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
        fn warn(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    const SCRIPT: &str = "scripts/run-integration-tests.sh";

    fn request(version: &str, mode: WriteMode, strict: bool) -> BumpRequest {
        BumpRequest {
            root: PathBuf::from("."),
            pattern: TargetPattern::new("./scripts/run-integration-tests.sh").unwrap(),
            marker: MarkerPrefix::default(),
            version: VersionString::new(version),
            mode,
            strict,
        }
    }

    #[test]
    fn rewrites_version_line_in_place() {
        let locator = StubLocator(vec![PathBuf::from(SCRIPT)]);
        let store =
            MemoryStore::with_file(SCRIPT, "#!/bin/sh\nreadonly PULSAR_DEFAULT_VERSION=2.10.0\necho done\n");

        let report = BumpVersion::new(&locator, &store, None)
            .run(&request("3.0.0", WriteMode::Apply, false))
            .unwrap();

        assert!(report.written);
        assert_eq!(report.target, PathBuf::from(SCRIPT));
        assert_eq!(store.content(SCRIPT), "#!/bin/sh\nreadonly PULSAR_DEFAULT_VERSION=\"3.0.0\"\necho done\n");
    }

    #[test]
    fn no_match_fails_without_writing() {
        let locator = StubLocator(vec![]);
        let store = MemoryStore::default();

        let err = BumpVersion::new(&locator, &store, None)
            .run(&request("3.0.0", WriteMode::Apply, false))
            .unwrap_err();

        assert!(matches!(err, PulsarVersionError::Application(ApplicationError::TargetNotFound { .. })));
        assert_eq!(*store.writes.borrow(), 0);
    }

    #[test]
    fn ambiguous_match_uses_first_and_warns() {
        let locator = StubLocator(vec![PathBuf::from("a.sh"), PathBuf::from("b.sh")]);
        let store = MemoryStore::with_file("a.sh", "readonly PULSAR_DEFAULT_VERSION=1\n");
        store.files.borrow_mut().insert(PathBuf::from("b.sh"), "readonly PULSAR_DEFAULT_VERSION=1\n".into());
        let notifier = RecordingNotifier::default();

        let report = BumpVersion::new(&locator, &store, Some(&notifier))
            .run(&request("2", WriteMode::Apply, false))
            .unwrap();

        assert_eq!(report.target, PathBuf::from("a.sh"));
        assert_eq!(store.content("b.sh"), "readonly PULSAR_DEFAULT_VERSION=1\n");
        assert!(notifier.warnings.borrow()[0].contains("matched 2 files"));
    }

    #[test]
    fn strict_rejects_ambiguous_match() {
        let locator = StubLocator(vec![PathBuf::from("a.sh"), PathBuf::from("b.sh")]);
        let store = MemoryStore::with_file("a.sh", "readonly PULSAR_DEFAULT_VERSION=1\n");

        let err = BumpVersion::new(&locator, &store, None)
            .run(&request("2", WriteMode::Apply, true))
            .unwrap_err();

        assert!(matches!(
            err,
            PulsarVersionError::Application(ApplicationError::AmbiguousTarget { ref matches, .. }) if matches.len() == 2
        ));
        assert_eq!(*store.writes.borrow(), 0);
    }

    #[test]
    fn missing_marker_is_noop_with_warning() {
        let locator = StubLocator(vec![PathBuf::from(SCRIPT)]);
        let store = MemoryStore::with_file(SCRIPT, "#!/bin/sh\n");
        let notifier = RecordingNotifier::default();

        let report = BumpVersion::new(&locator, &store, Some(&notifier))
            .run(&request("3.0.0", WriteMode::Apply, false))
            .unwrap();

        assert!(!report.written);
        assert_eq!(*store.writes.borrow(), 0);
        assert!(notifier.warnings.borrow()[0].contains("file left unchanged"));
    }

    #[test]
    fn dry_run_and_check_never_write() {
        for mode in [WriteMode::DryRun, WriteMode::Check] {
            let locator = StubLocator(vec![PathBuf::from(SCRIPT)]);
            let store = MemoryStore::with_file(SCRIPT, "readonly PULSAR_DEFAULT_VERSION=1\n");

            let report = BumpVersion::new(&locator, &store, None).run(&request("2", mode, false)).unwrap();

            assert!(report.outcome.changed);
            assert!(!report.written);
            assert_eq!(*store.writes.borrow(), 0);
        }
    }

    #[test]
    fn write_failure_carries_context() {
        let locator = StubLocator(vec![PathBuf::from(SCRIPT)]);
        let mut store = MemoryStore::with_file(SCRIPT, "readonly PULSAR_DEFAULT_VERSION=1\n");
        store.fail_writes = true;

        let err = BumpVersion::new(&locator, &store, None)
            .run(&request("2", WriteMode::Apply, false))
            .unwrap_err();

        assert_eq!(err.to_string(), "updating scripts/run-integration-tests.sh");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "Failed to write file 'scripts/run-integration-tests.sh'");
    }
}

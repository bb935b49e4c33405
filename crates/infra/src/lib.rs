// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod console;
pub mod filesystem;
pub mod persistence;

pub use console::ConsoleNotifier;
pub use filesystem::GlobTargetLocator;
pub use persistence::FsScriptStore;

//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: target resolution and script persistence
//! - [`notify`]: console diagnostics
//!
//! These ports keep the use case independent of the real filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod notify;

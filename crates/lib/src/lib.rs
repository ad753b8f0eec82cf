//! brush-lib: package declarative color themes as editor extensions.
//!
//! The crate turns a [`config::BuildConfig`] into a packaged `.vsix`:
//! - `guard`: precondition checks (tools present, root exists, no manifest yet)
//! - `artifact`: JSON files that live only around an external call
//! - `manifest`, `identity`: pure derivation of names, paths and documents
//! - `pipeline`: build, install and uninstall built from the pieces above
//!
//! Everything is synchronous and single-threaded.

pub mod artifact;
pub mod builder;
pub mod config;
pub mod error;
pub mod guard;
pub mod identity;
pub mod manifest;
pub mod pipeline;
pub mod process;
pub mod theme;

#[cfg(test)]
mod testutil;

pub use error::{Error, ErrorKind, Raise, Result};
pub use pipeline::{BuildOptions, Extension, Plan, build, plan};

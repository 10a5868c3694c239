//! Core types and the scaffold materializer for the sprout project generator.
//!
//! This crate knows nothing about what a scaffold contains. It validates the
//! project name, carries rendered files, and turns them into a buildable tree
//! by writing them to disk and running the configured setup commands.

mod config;
mod error;
mod file;
mod materialize;
mod progress;
mod project;
mod setup;
mod version;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::ScaffoldConfig;
pub use error::{Error, Result};
pub use file::RenderedFileSet;
pub use materialize::{CommandRecord, FetchRecord, MaterializeReport, Materializer, Stage};
pub use progress::Progress;
pub use project::{MODULE_PREFIX, ProjectContext, ProjectName};
pub use setup::{CommandOutput, CommandRunner, FetchStep, SetupCommand, SetupPlan, SystemRunner};
pub use version::Version;

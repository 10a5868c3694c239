//! Template registry for the Go web service scaffold generated by sprout.
//!
//! Every generated file is a [`Template`]: a fixed output path plus a pure
//! function from [`ProjectContext`] to text. Template bodies live in
//! `templates/` as plain files and are embedded at compile time; the Rust
//! side only fills in their `{{placeholders}}`.
//!
//! # Example
//!
//! ```
//! use sprout_core::{ProjectContext, ProjectName};
//!
//! let ctx = ProjectContext::new(ProjectName::new("acme").unwrap());
//! let files = sprout_templates::render(&ctx);
//!
//! assert!(files.get("go.mod").unwrap().starts_with("module github.com/devkaare/acme\n"));
//! ```

mod deps;
pub mod files;
mod registry;
mod substitute;

use sprout_core::ProjectContext;

pub use deps::{
    GO_VERSION, MODULE_REQUIREMENTS, ModuleRequirement, REQUIRED_PACKAGES, TEMPL_CLI, setup_plan,
};
pub use registry::{TemplateRegistry, render};
pub use substitute::has_placeholder;
pub(crate) use substitute::substitute;

/// A generated file: where it goes and how to render it.
pub trait Template {
    /// Output path relative to the project root, `/`-separated.
    fn path(&self) -> &'static str;

    /// Render the file content. Must not perform I/O.
    fn render(&self, ctx: &ProjectContext) -> String;
}

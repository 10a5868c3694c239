//! Pinned dependencies of the generated service and the commands that
//! install them.

use sprout_core::{FetchStep, SetupCommand, SetupPlan, Version};

/// Go toolchain version declared in `go.mod`.
pub const GO_VERSION: Version = Version::new(1, 23, 5);

/// A `require` line in `go.mod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRequirement {
    pub module: &'static str,
    pub version: Version,
}

impl ModuleRequirement {
    pub const fn new(module: &'static str, version: Version) -> Self {
        Self { module, version }
    }
}

/// Modules the generated `go.mod` requires, with pinned versions.
pub const MODULE_REQUIREMENTS: [ModuleRequirement; 4] = [
    ModuleRequirement::new("github.com/a-h/templ", Version::new(0, 3, 833)),
    ModuleRequirement::new("github.com/go-chi/chi/v5", Version::new(5, 2, 1)),
    ModuleRequirement::new("github.com/go-chi/cors", Version::new(1, 2, 1)),
    ModuleRequirement::new("github.com/joho/godotenv", Version::new(1, 5, 1)),
];

/// Packages fetched with `go get`, one at a time and in this order.
pub const REQUIRED_PACKAGES: [&str; 5] = [
    "github.com/go-chi/chi/v5",
    "github.com/go-chi/chi/v5/middleware",
    "github.com/go-chi/cors",
    "github.com/joho/godotenv",
    "github.com/a-h/templ",
];

/// The templ code generator CLI.
pub const TEMPL_CLI: &str = "github.com/a-h/templ/cmd/templ@latest";

/// `go get` each required package, install templ, then run `templ generate`.
pub fn setup_plan() -> SetupPlan {
    SetupPlan {
        fetch: REQUIRED_PACKAGES
            .iter()
            .map(|package| FetchStep {
                package: package.to_string(),
                command: SetupCommand::new("go").args(["get", package]),
            })
            .collect(),
        install: SetupCommand::new("go").args(["install", TEMPL_CLI]),
        generate: SetupCommand::new("templ").arg("generate"),
    }
}

use sprout_core::{ProjectContext, Version};

use crate::{
    Template,
    deps::{GO_VERSION, MODULE_REQUIREMENTS, ModuleRequirement},
    substitute,
};

const BODY: &str = include_str!("../../templates/go.mod.tmpl");

/// The `go.mod` module manifest
pub struct GoMod {
    pub go_version: Version,
    pub requires: Vec<ModuleRequirement>,
}

impl GoMod {
    pub fn new() -> Self {
        Self {
            go_version: GO_VERSION,
            requires: MODULE_REQUIREMENTS.to_vec(),
        }
    }

    fn require_block(&self) -> String {
        let mut out = String::new();
        for req in &self.requires {
            out.push_str(&format!("\t{} {}\n", req.module, req.version.tag()));
        }
        out
    }
}

impl Default for GoMod {
    fn default() -> Self {
        Self::new()
    }
}

impl Template for GoMod {
    fn path(&self) -> &'static str {
        "go.mod"
    }

    fn render(&self, ctx: &ProjectContext) -> String {
        let module_path = ctx.module_path();
        let go_version = self.go_version.to_string();
        let requires = self.require_block();
        substitute(
            BODY,
            &[
                ("module_path", module_path.as_str()),
                ("go_version", go_version.as_str()),
                ("requires", requires.as_str()),
            ],
        )
    }
}

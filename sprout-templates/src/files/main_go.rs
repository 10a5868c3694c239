use sprout_core::ProjectContext;

use crate::{Template, substitute};

const BODY: &str = include_str!("../../templates/main.go.tmpl");

pub const MAIN_GO_PATH: &str = "cmd/api/main.go";

/// The `cmd/api/main.go` entry point with graceful shutdown
pub struct MainGo;

impl Template for MainGo {
    fn path(&self) -> &'static str {
        MAIN_GO_PATH
    }

    fn render(&self, ctx: &ProjectContext) -> String {
        let module_path = ctx.module_path();
        substitute(BODY, &[("module_path", module_path.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use sprout_core::ProjectName;

    use super::*;

    #[test]
    fn test_imports_server_package_of_project() {
        let ctx = ProjectContext::new(ProjectName::new("acme").unwrap());
        let out = MainGo.render(&ctx);

        assert!(out.starts_with("package main\n"));
        assert!(out.contains("\t\"github.com/devkaare/acme/server\"\n"));
        assert!(out.contains("server := server.NewServer()"));
    }
}

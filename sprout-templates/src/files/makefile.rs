use sprout_core::ProjectContext;

use super::main_go::MAIN_GO_PATH;
use crate::{Template, substitute};

const BODY: &str = include_str!("../../templates/Makefile.tmpl");

/// The `Makefile` with run/build/test/clean targets
pub struct Makefile {
    pub main_file: &'static str,
}

impl Makefile {
    pub fn new() -> Self {
        Self {
            main_file: MAIN_GO_PATH,
        }
    }
}

impl Default for Makefile {
    fn default() -> Self {
        Self::new()
    }
}

impl Template for Makefile {
    fn path(&self) -> &'static str {
        "Makefile"
    }

    fn render(&self, _ctx: &ProjectContext) -> String {
        substitute(BODY, &[("main_file", self.main_file)])
    }
}

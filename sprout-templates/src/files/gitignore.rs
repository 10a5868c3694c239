use sprout_core::ProjectContext;

use crate::Template;

/// The .gitignore file
pub struct GitIgnore;

impl Template for GitIgnore {
    fn path(&self) -> &'static str {
        ".gitignore"
    }

    fn render(&self, _ctx: &ProjectContext) -> String {
        ".env\n".to_string()
    }
}

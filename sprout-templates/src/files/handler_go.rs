use sprout_core::ProjectContext;

use crate::Template;

/// The `handler/handler.go` file
pub struct HandlerGo;

impl Template for HandlerGo {
    fn path(&self) -> &'static str {
        "handler/handler.go"
    }

    fn render(&self, _ctx: &ProjectContext) -> String {
        include_str!("../../templates/handler.go.tmpl").to_string()
    }
}

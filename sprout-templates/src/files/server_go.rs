use sprout_core::ProjectContext;

use crate::Template;

/// The `server/server.go` file; reads `PORT` from the environment
pub struct ServerGo;

impl Template for ServerGo {
    fn path(&self) -> &'static str {
        "server/server.go"
    }

    fn render(&self, _ctx: &ProjectContext) -> String {
        include_str!("../../templates/server.go.tmpl").to_string()
    }
}

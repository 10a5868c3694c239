use sprout_core::ProjectContext;

use crate::{Template, substitute};

const BODY: &str = include_str!("../../templates/routes.go.tmpl");

/// The `server/routes.go` router
///
/// Mounts the templ `Hello` view at `/` and the greeting handler at
/// `/api/hello`. Both the handler and views packages are imported from the
/// project's own module.
pub struct RoutesGo;

impl Template for RoutesGo {
    fn path(&self) -> &'static str {
        "server/routes.go"
    }

    fn render(&self, ctx: &ProjectContext) -> String {
        let module_path = ctx.module_path();
        substitute(BODY, &[("module_path", module_path.as_str())])
    }
}

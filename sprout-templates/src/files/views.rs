//! templ view templates. `templ generate` compiles these into Go.

use sprout_core::ProjectContext;

use crate::Template;

/// `views/base.templ`: the HTML layout every page renders into
pub struct BaseTempl;

impl Template for BaseTempl {
    fn path(&self) -> &'static str {
        "views/base.templ"
    }

    fn render(&self, _ctx: &ProjectContext) -> String {
        include_str!("../../templates/base.templ.tmpl").to_string()
    }
}

/// `views/hello.templ`
pub struct HelloTempl;

impl Template for HelloTempl {
    fn path(&self) -> &'static str {
        "views/hello.templ"
    }

    fn render(&self, _ctx: &ProjectContext) -> String {
        include_str!("../../templates/hello.templ.tmpl").to_string()
    }
}

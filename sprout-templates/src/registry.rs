//! The fixed set of templates that make up a scaffold.

use sprout_core::{ProjectContext, RenderedFileSet};

use crate::{
    Template,
    files::{
        BaseTempl, EnvFile, GitIgnore, GoMod, HandlerGo, HelloTempl, MainGo, Makefile, RoutesGo,
        ServerGo,
    },
};

/// Registry of every file in the scaffold.
///
/// The set is closed: it is built once by [`TemplateRegistry::standard`] and
/// cannot be extended at runtime.
pub struct TemplateRegistry {
    templates: Vec<Box<dyn Template>>,
}

impl TemplateRegistry {
    /// The Go web service scaffold.
    pub fn standard() -> Self {
        Self {
            templates: vec![
                Box::new(MainGo),
                Box::new(HandlerGo),
                Box::new(ServerGo),
                Box::new(RoutesGo),
                Box::new(BaseTempl),
                Box::new(HelloTempl),
                Box::new(Makefile::new()),
                Box::new(EnvFile::default()),
                Box::new(GitIgnore),
                Box::new(GoMod::new()),
            ],
        }
    }

    /// Output paths, in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.iter().map(|t| t.path())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render every template for `ctx`.
    ///
    /// Pure: performs no I/O and returns identical output for identical input.
    pub fn render(&self, ctx: &ProjectContext) -> RenderedFileSet {
        let mut files = RenderedFileSet::new();
        for template in &self.templates {
            let previous = files.insert(template.path(), template.render(ctx));
            debug_assert!(previous.is_none(), "duplicate template path {}", template.path());
        }
        files
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Render the standard scaffold for `ctx`.
pub fn render(ctx: &ProjectContext) -> RenderedFileSet {
    TemplateRegistry::standard().render(ctx)
}

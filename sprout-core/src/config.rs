use std::path::{Path, PathBuf};

use crate::SetupPlan;

/// Immutable settings for one scaffold run.
///
/// Built once at startup and handed to the [`Materializer`](crate::Materializer)
/// by reference.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    root: PathBuf,
    plan: SetupPlan,
}

impl ScaffoldConfig {
    /// Scaffold into `root` and bring it up with `plan`.
    pub fn new(root: impl Into<PathBuf>, plan: SetupPlan) -> Self {
        Self {
            root: root.into(),
            plan,
        }
    }

    /// Directory every output path is relative to, and the working
    /// directory of every setup command.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn plan(&self) -> &SetupPlan {
        &self.plan
    }

    /// Location of a `/`-separated output path under the root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            return self.root.clone();
        }
        relative
            .split('/')
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

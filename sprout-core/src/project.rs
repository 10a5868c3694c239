use std::fmt;

use crate::{Error, Result};

/// Prefix every generated module path lives under.
pub const MODULE_PREFIX: &str = "github.com/devkaare";

/// A validated project name.
///
/// The name ends up as the last element of a Go module path, so it must be
/// a valid module path element: ASCII letters, digits, `-`, `.`, `_` and `~`,
/// not starting or ending with a dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::invalid_name(name, "project name cannot be empty"));
        }

        if let Some(c) = name.chars().find(|c| !is_path_element_char(*c)) {
            let reason = if c.is_whitespace() {
                "project name cannot contain whitespace".to_string()
            } else if c == '/' || c == '\\' {
                "project name cannot contain path separators".to_string()
            } else {
                format!("'{}' is not allowed in a module path element", c)
            };
            return Err(Error::invalid_name(name, reason));
        }

        if name.starts_with('.') || name.ends_with('.') {
            return Err(Error::invalid_name(
                name,
                "project name cannot start or end with '.'",
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_path_element_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything a template needs to render itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    name: ProjectName,
}

impl ProjectContext {
    pub fn new(name: ProjectName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Full module path, e.g. `github.com/devkaare/acme`
    pub fn module_path(&self) -> String {
        format!("{}/{}", MODULE_PREFIX, self.name)
    }
}

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for sprout-core operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid project name '{name}'")]
    #[diagnostic(
        code(sprout::invalid_name),
        help(
            "{reason}. Use only ASCII letters, digits, '-', '.', '_' and '~', not starting or ending with '.'"
        )
    )]
    InvalidProjectName { name: String, reason: String },

    #[error("failed to create directory '{path}'")]
    #[diagnostic(
        code(sprout::create_dir),
        help("make sure the path is not an existing file and that you have write access")
    )]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(sprout::write_file))]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run `{command}`")]
    #[diagnostic(
        code(sprout::spawn),
        help("make sure the program is installed and on your PATH")
    )]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    #[diagnostic(code(sprout::command_failed), help("{output}"))]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },
}

impl Error {
    /// Create an invalid project name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        })
    }
}

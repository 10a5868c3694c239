//! External setup commands and the seam used to run them.

use std::{fmt, path::Path, process::Command};

use crate::{Error, Result};

/// A single external invocation, e.g. `go get github.com/go-chi/cors`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupCommand {
    program: String,
    args: Vec<String>,
}

impl SetupCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for SetupCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// The ordered list of commands that bring a fresh scaffold to a buildable
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlan {
    /// One fetch per required package, run in order.
    pub fetch: Vec<FetchStep>,
    /// Installs the code generation tool.
    pub install: SetupCommand,
    /// Runs the code generator over the written view templates.
    pub generate: SetupCommand,
}

/// A fetch command together with the package it acquires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchStep {
    pub package: String,
    pub command: SetupCommand,
}

impl SetupPlan {
    /// Every command in execution order.
    pub fn commands(&self) -> impl Iterator<Item = &SetupCommand> {
        self.fetch
            .iter()
            .map(|step| &step.command)
            .chain([&self.install, &self.generate])
    }
}

/// Captured result of a finished external process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run that printed `stdout`.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and error output.
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human readable exit status, e.g. `exit code 1`.
    pub fn status(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "termination by signal".to_string(),
        }
    }

    /// Stdout followed by stderr, trimmed, for diagnostics.
    pub fn combined(&self) -> String {
        let stdout = self.stdout.trim_end();
        let stderr = self.stderr.trim_end();
        match (stdout.is_empty(), stderr.is_empty()) {
            (true, true) => "(no output)".to_string(),
            (false, true) => stdout.to_string(),
            (true, false) => stderr.to_string(),
            (false, false) => format!("{}\n{}", stdout, stderr),
        }
    }
}

/// Runs setup commands.
///
/// Implementations only report what happened; deciding whether a non-zero
/// exit is fatal is up to the caller.
pub trait CommandRunner {
    /// Run `command` with `dir` as working directory and wait for it to finish.
    fn run(&mut self, command: &SetupCommand, dir: &Path) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, command: &SetupCommand, dir: &Path) -> Result<CommandOutput> {
        (**self).run(command, dir)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &SetupCommand, dir: &Path) -> Result<CommandOutput> {
        tracing::debug!(command = %command, dir = %dir.display(), "spawning");

        let output = Command::new(command.program())
            .args(command.get_args())
            .current_dir(dir)
            .output()
            .map_err(|source| {
                Box::new(Error::Spawn {
                    command: command.to_string(),
                    source,
                })
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

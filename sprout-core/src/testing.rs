//! Test utilities for code that runs setup commands.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use crate::{CommandOutput, CommandRunner, Error, Result, SetupCommand};

/// A recorded call to [`CommandRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: SetupCommand,
    pub dir: PathBuf,
}

/// How a scripted command should fail.
#[derive(Debug, Clone)]
pub enum ScriptedFailure {
    /// The program could not be launched.
    Spawn,
    /// The program ran and exited unsuccessfully.
    Exit { code: i32, stderr: String },
}

/// A [`CommandRunner`] that records every invocation instead of spawning
/// processes.
///
/// Commands succeed with empty output unless scripted otherwise. Commands
/// are matched by their display form, e.g. `"go get github.com/go-chi/cors"`.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: Vec<Invocation>,
    outputs: HashMap<String, String>,
    failures: HashMap<String, ScriptedFailure>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` print `stdout` and succeed.
    pub fn respond(mut self, command: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.outputs.insert(command.into(), stdout.into());
        self
    }

    /// Make `command` fail.
    pub fn fail_on(mut self, command: impl Into<String>, failure: ScriptedFailure) -> Self {
        self.failures.insert(command.into(), failure);
        self
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Display form of every invocation, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations
            .iter()
            .map(|i| i.command.to_string())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &SetupCommand, dir: &Path) -> Result<CommandOutput> {
        self.invocations.push(Invocation {
            command: command.clone(),
            dir: dir.to_path_buf(),
        });

        let line = command.to_string();
        match self.failures.get(&line) {
            Some(ScriptedFailure::Spawn) => Err(Box::new(Error::Spawn {
                command: line,
                source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
            })),
            Some(ScriptedFailure::Exit { code, stderr }) => {
                Ok(CommandOutput::failure(*code, stderr.clone()))
            }
            None => Ok(CommandOutput::success(
                self.outputs.get(&line).cloned().unwrap_or_default(),
            )),
        }
    }
}

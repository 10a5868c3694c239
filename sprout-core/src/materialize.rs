//! Turns a [`RenderedFileSet`] into an on-disk project and runs its setup
//! commands.
//!
//! A run moves through the stages
//! `Start → DirsCreated → FilesWritten → PackagesFetched → ToolInstalled → Generated → Done`,
//! strictly in order. The first failure moves it to `Failed` and nothing
//! done so far is rolled back.

use std::{fmt, fs, path::Path};

use crate::{
    CommandOutput, CommandRunner, Error, Progress, RenderedFileSet, Result, ScaffoldConfig,
    SetupCommand,
};

/// Progress of a materialization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    DirsCreated,
    FilesWritten,
    PackagesFetched,
    ToolInstalled,
    Generated,
    Done,
    /// Terminal; a failed run must be started again from scratch.
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::DirsCreated => "directories created",
            Stage::FilesWritten => "files written",
            Stage::PackagesFetched => "packages fetched",
            Stage::ToolInstalled => "tool installed",
            Stage::Generated => "code generated",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A setup command that ran successfully, with what it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub command: String,
    pub output: CommandOutput,
}

/// A package fetch that ran successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRecord {
    pub package: String,
    pub record: CommandRecord,
}

/// Everything a successful run did, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Directories ensured to exist, as root-relative paths (`""` is the root).
    pub directories: Vec<String>,
    /// Files written, as root-relative paths.
    pub files: Vec<String>,
    pub packages: Vec<FetchRecord>,
    pub install: CommandRecord,
    pub generate: CommandRecord,
}

/// Writes a rendered scaffold under [`ScaffoldConfig::root`] and runs the
/// configured [`SetupPlan`](crate::SetupPlan).
pub struct Materializer<'a, R> {
    config: &'a ScaffoldConfig,
    runner: R,
    stage: Stage,
    last_completed: Stage,
}

impl<'a, R: CommandRunner> Materializer<'a, R> {
    pub fn new(config: &'a ScaffoldConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            stage: Stage::Start,
            last_completed: Stage::Start,
        }
    }

    /// Current stage of the run.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The last stage reached before a failure (or the current one).
    pub fn last_completed(&self) -> Stage {
        self.last_completed
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Perform every step, stopping at the first error.
    ///
    /// `progress` hears about each step as it happens, so a caller can show
    /// what was done even when the run fails part way.
    pub fn run(
        &mut self,
        files: &RenderedFileSet,
        progress: &mut dyn Progress,
    ) -> Result<MaterializeReport> {
        if self.stage != Stage::Start {
            tracing::warn!(stage = %self.stage, "materializer reused; starting over");
            self.stage = Stage::Start;
            self.last_completed = Stage::Start;
        }

        match self.run_stages(files, progress) {
            Ok(report) => Ok(report),
            Err(err) => {
                tracing::debug!(after = %self.last_completed, error = %err, "scaffold failed");
                self.stage = Stage::Failed;
                Err(err)
            }
        }
    }

    fn run_stages(
        &mut self,
        files: &RenderedFileSet,
        progress: &mut dyn Progress,
    ) -> Result<MaterializeReport> {
        progress.stage_started(Stage::DirsCreated);
        let directories = self.create_directories(files, progress)?;
        self.advance(Stage::DirsCreated);

        progress.stage_started(Stage::FilesWritten);
        let written = self.write_files(files, progress)?;
        self.advance(Stage::FilesWritten);

        let config = self.config;
        let plan = config.plan();

        progress.stage_started(Stage::PackagesFetched);
        let mut packages = Vec::with_capacity(plan.fetch.len());
        for step in &plan.fetch {
            tracing::debug!(package = %step.package, "fetching package");
            progress.package_started(&step.package);
            let record = self.run_command(&step.command, progress)?;
            packages.push(FetchRecord {
                package: step.package.clone(),
                record,
            });
        }
        self.advance(Stage::PackagesFetched);

        progress.stage_started(Stage::ToolInstalled);
        let install = self.run_command(&plan.install, progress)?;
        self.advance(Stage::ToolInstalled);

        progress.stage_started(Stage::Generated);
        let generate = self.run_command(&plan.generate, progress)?;
        self.advance(Stage::Generated);

        self.advance(Stage::Done);

        Ok(MaterializeReport {
            directories,
            files: written,
            packages,
            install,
            generate,
        })
    }

    fn advance(&mut self, stage: Stage) {
        tracing::info!(stage = %stage, "scaffold stage complete");
        self.stage = stage;
        self.last_completed = stage;
    }

    fn create_directories(
        &self,
        files: &RenderedFileSet,
        progress: &mut dyn Progress,
    ) -> Result<Vec<String>> {
        let mut created = Vec::new();
        for dir in files.directories() {
            let path = self.config.resolve(dir);
            tracing::debug!(path = %path.display(), "creating directory");
            create_dir_all(&path).map_err(|source| Box::new(Error::CreateDir { path, source }))?;
            progress.directory_created(dir);
            created.push(dir.to_string());
        }
        Ok(created)
    }

    fn write_files(
        &self,
        files: &RenderedFileSet,
        progress: &mut dyn Progress,
    ) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(files.len());
        for (relative, content) in files.iter() {
            let path = self.config.resolve(relative);
            tracing::debug!(path = %path.display(), bytes = content.len(), "writing file");
            fs::write(&path, content).map_err(|source| Box::new(Error::WriteFile { path, source }))?;
            progress.file_written(relative);
            written.push(relative.to_string());
        }
        Ok(written)
    }

    fn run_command(
        &mut self,
        command: &SetupCommand,
        progress: &mut dyn Progress,
    ) -> Result<CommandRecord> {
        tracing::debug!(command = %command, "running setup command");
        let output = self.runner.run(command, self.config.root())?;

        if !output.is_success() {
            return Err(Box::new(Error::CommandFailed {
                command: command.to_string(),
                status: output.status(),
                output: output.combined(),
            }));
        }

        let record = CommandRecord {
            command: command.to_string(),
            output,
        };
        progress.command_finished(&record);
        Ok(record)
    }
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(0o755).create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

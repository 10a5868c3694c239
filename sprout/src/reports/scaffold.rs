//! Scaffold transcript.
//!
//! [`ScaffoldProgress`] prints each step while the materializer runs;
//! [`ScaffoldReport`] closes the transcript once everything succeeded.

use std::path::{Path, PathBuf};

use sprout_core::{CommandOutput, CommandRecord, MaterializeReport, Progress, Stage};

use super::output::{Output, Report};

/// Streams progress lines to an [`Output`] as the run happens.
pub struct ScaffoldProgress<'o> {
    out: &'o mut dyn Output,
}

impl<'o> ScaffoldProgress<'o> {
    pub fn new(out: &'o mut dyn Output) -> Self {
        Self { out }
    }

    pub fn started(&mut self, module_path: &str, root: &Path) {
        self.out
            .heading(&format!("Scaffolding {} in {}", module_path, root.display()));
    }
}

impl Progress for ScaffoldProgress<'_> {
    fn stage_started(&mut self, stage: Stage) {
        let heading = match stage {
            Stage::DirsCreated => "Creating folders...",
            Stage::FilesWritten => "Creating and writing files:",
            Stage::PackagesFetched => "Installing packages:",
            Stage::ToolInstalled => "Installing templ:",
            Stage::Generated => "Generating templ files:",
            Stage::Start | Stage::Done | Stage::Failed => return,
        };
        self.out.heading(heading);
    }

    fn directory_created(&mut self, dir: &str) {
        self.out.item("Folder", if dir.is_empty() { "." } else { dir });
    }

    fn file_written(&mut self, path: &str) {
        self.out.item("File", path);
    }

    fn package_started(&mut self, package: &str) {
        self.out.item("Package", package);
    }

    fn command_finished(&mut self, record: &CommandRecord) {
        render_output(self.out, &record.output);
    }
}

/// Everything a successful scaffold run did.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Go module path declared in go.mod.
    pub module_path: String,
    /// Directory the project was written to.
    pub root: PathBuf,
    /// Per-step results from the materializer.
    pub materialized: MaterializeReport,
}

impl Report for ScaffoldReport {
    fn render(&self, out: &mut dyn Output) {
        out.heading("Done!");
    }
}

fn render_output(out: &mut dyn Output, output: &CommandOutput) {
    for text in [&output.stdout, &output.stderr] {
        let text = text.trim_end();
        if !text.is_empty() {
            out.preformatted(text);
        }
    }
}

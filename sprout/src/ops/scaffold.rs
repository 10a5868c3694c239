//! Scaffold operation - render the templates and materialize them.

use sprout_core::{
    CommandRunner, Materializer, ProjectContext, ProjectName, Result, ScaffoldConfig,
};

use crate::reports::{Output, ScaffoldProgress, ScaffoldReport};

/// Execute the scaffold operation.
///
/// Validates `name` before anything touches the filesystem, renders every
/// template and hands the result to the materializer. Progress goes to
/// `out` as each step completes. The first error aborts the run; whatever
/// was already written stays on disk.
pub fn scaffold<R: CommandRunner>(
    name: &str,
    config: &ScaffoldConfig,
    runner: &mut R,
    out: &mut dyn Output,
) -> Result<ScaffoldReport> {
    let ctx = ProjectContext::new(ProjectName::new(name)?);
    let files = sprout_templates::render(&ctx);
    tracing::info!(
        module = %ctx.module_path(),
        files = files.len(),
        root = %config.root().display(),
        "rendered scaffold"
    );

    let mut progress = ScaffoldProgress::new(out);
    progress.started(&ctx.module_path(), config.root());
    let materialized = Materializer::new(config, runner).run(&files, &mut progress)?;

    Ok(ScaffoldReport {
        module_path: ctx.module_path(),
        root: config.root().to_path_buf(),
        materialized,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use sprout_core::{
        Error, SetupPlan,
        testing::{RecordingRunner, ScriptedFailure},
    };
    use sprout_templates::{REQUIRED_PACKAGES, setup_plan};
    use tempfile::TempDir;

    use super::*;
    use crate::reports::BufferOutput;

    fn scaffold_quietly<R: CommandRunner>(
        name: &str,
        config: &ScaffoldConfig,
        runner: &mut R,
    ) -> Result<ScaffoldReport> {
        scaffold(name, config, runner, &mut BufferOutput::default())
    }

    fn config(temp: &TempDir) -> ScaffoldConfig {
        ScaffoldConfig::new(temp.path(), setup_plan())
    }

    #[test]
    fn test_sample_project_end_to_end() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);

        let mut runner = RecordingRunner::new();

        let report = scaffold_quietly("sample", &config, &mut runner).unwrap();

        assert_eq!(report.module_path, "github.com/devkaare/sample");

        let go_mod = fs::read_to_string(temp.path().join("go.mod")).unwrap();
        assert!(go_mod.starts_with("module github.com/devkaare/sample\n"));

        let main_go = fs::read_to_string(temp.path().join("cmd/api/main.go")).unwrap();
        assert!(main_go.contains("\"github.com/devkaare/sample/server\""));
        assert!(temp.path().join("server/server.go").is_file());
        assert!(temp.path().join("views/hello.templ").is_file());

        let fetched: Vec<String> = runner
            .command_lines()
            .into_iter()
            .filter_map(|l| l.strip_prefix("go get ").map(str::to_string))
            .collect();
        assert_eq!(fetched, REQUIRED_PACKAGES);

        let lines = runner.command_lines();
        assert_eq!(lines.len(), REQUIRED_PACKAGES.len() + 2);
        assert_eq!(
            lines[lines.len() - 2],
            "go install github.com/a-h/templ/cmd/templ@latest"
        );
        assert_eq!(lines[lines.len() - 1], "templ generate");
    }

    #[test]
    fn test_progress_streams_until_failure() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);
        let mut runner = RecordingRunner::new()
            .respond(
                "go get github.com/go-chi/chi/v5",
                "go: added github.com/go-chi/chi/v5 v5.2.1\n",
            )
            .fail_on(
                "go get github.com/go-chi/chi/v5/middleware",
                ScriptedFailure::Exit {
                    code: 1,
                    stderr: "no route to host".to_string(),
                },
            );
        let mut out = BufferOutput::default();

        let err = scaffold("acme", &config, &mut runner, &mut out).unwrap_err();

        assert!(matches!(*err, Error::CommandFailed { .. }));
        let scaffolding = format!(
            "Scaffolding github.com/devkaare/acme in {}",
            temp.path().display()
        );
        assert_eq!(
            out.lines,
            vec![
                scaffolding.as_str(),
                "Creating folders...",
                "\tFolder: cmd/api",
                "\tFolder: handler",
                "\tFolder: server",
                "\tFolder: views",
                "\tFolder: .",
                "Creating and writing files:",
                "\tFile: cmd/api/main.go",
                "\tFile: handler/handler.go",
                "\tFile: server/server.go",
                "\tFile: server/routes.go",
                "\tFile: views/base.templ",
                "\tFile: views/hello.templ",
                "\tFile: Makefile",
                "\tFile: .env",
                "\tFile: .gitignore",
                "\tFile: go.mod",
                "Installing packages:",
                "\tPackage: github.com/go-chi/chi/v5",
                "go: added github.com/go-chi/chi/v5 v5.2.1",
                "\tPackage: github.com/go-chi/chi/v5/middleware",
            ]
        );
    }

    #[test]
    fn test_progress_covers_every_step_on_success() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);
        let mut runner = RecordingRunner::new().respond("templ generate", "(✓) Complete\n");
        let mut out = BufferOutput::default();

        scaffold("acme", &config, &mut runner, &mut out).unwrap();

        let packages = out.lines.iter().filter(|l| l.starts_with("\tPackage: ")).count();
        assert_eq!(packages, REQUIRED_PACKAGES.len());
        assert_eq!(
            &out.lines[out.lines.len() - 3..],
            ["Installing templ:", "Generating templ files:", "(✓) Complete"]
        );
    }

    #[test]
    fn test_scaffold_returns_report() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);

        let report = scaffold_quietly("acme", &config, &mut RecordingRunner::new()).unwrap();

        assert_eq!(report.root, temp.path());
        assert_eq!(report.materialized.files.len(), 10);
        assert_eq!(report.materialized.packages.len(), REQUIRED_PACKAGES.len());
        assert_eq!(report.materialized.generate.command, "templ generate");
    }

    #[test]
    fn test_rerun_overwrites_files() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);
        scaffold_quietly("acme", &config, &mut RecordingRunner::new()).unwrap();
        fs::write(temp.path().join(".env"), "PORT=1\nSECRET=x\n").unwrap();

        scaffold_quietly("acme", &config, &mut RecordingRunner::new()).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join(".env")).unwrap(),
            "PORT=8080\n"
        );
    }

    #[test]
    fn test_invalid_name_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);

        let mut runner = RecordingRunner::new();

        let err = scaffold_quietly("my app", &config, &mut runner).unwrap_err();
        assert!(matches!(*err, Error::InvalidProjectName { .. }));
        assert!(runner.invocations().is_empty());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_failure_runs_no_commands() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("go.mod")).unwrap();
        let config = config(&temp);

        let mut runner = RecordingRunner::new();

        let err = scaffold_quietly("acme", &config, &mut runner).unwrap_err();

        assert!(matches!(*err, Error::WriteFile { .. }));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_generate_failure_surfaces_output() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);
        let mut runner = RecordingRunner::new().fail_on(
            "templ generate",
            ScriptedFailure::Exit {
                code: 1,
                stderr: "views/hello.templ: parse error\n".to_string(),
            },
        );

        let err = scaffold_quietly("acme", &config, &mut runner).unwrap_err();

        match *err {
            Error::CommandFailed { ref output, .. } => {
                assert_eq!(output, "views/hello.templ: parse error")
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
        // Files written before the failure stay on disk.
        assert!(temp.path().join("go.mod").is_file());
    }

    #[test]
    fn test_custom_plan_is_used() {
        let temp = TempDir::new().unwrap();
        let plan = SetupPlan {
            fetch: Vec::new(),
            install: sprout_core::SetupCommand::new("true"),
            generate: sprout_core::SetupCommand::new("true"),
        };
        let config = ScaffoldConfig::new(temp.path(), plan);

        let mut runner = RecordingRunner::new();

        let report = scaffold_quietly("acme", &config, &mut runner).unwrap();

        assert!(report.materialized.packages.is_empty());
        assert_eq!(runner.command_lines(), vec!["true", "true"]);
    }
}

use clap::Parser;
use eyre::{Context, Result};
use sprout_core::{ScaffoldConfig, SystemRunner};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// Extension trait for exiting on scaffold errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sprout_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sprout")]
#[command(version)]
#[command(about = "Scaffold a Go web service (chi + templ) in the current directory")]
pub(crate) struct Cli {
    /// Project name, used as the last element of the Go module path
    #[arg(short, long, default_value = "my-new-project")]
    pub name: String,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let root = std::env::current_dir().wrap_err("Failed to get current directory")?;
        let config = ScaffoldConfig::new(root, sprout_templates::setup_plan());

        let mut out = TerminalOutput::new();
        let report =
            ops::scaffold(&self.name, &config, &mut SystemRunner, &mut out).unwrap_or_exit();
        report.render(&mut out);
        tracing::info!(
            module = %report.module_path,
            root = %report.root.display(),
            files = report.materialized.files.len(),
            packages = report.materialized.packages.len(),
            "scaffold complete"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_name() {
        let cli = Cli::try_parse_from(["sprout"]).unwrap();
        assert_eq!(cli.name, "my-new-project");
    }

    #[test]
    fn test_name_flag() {
        let cli = Cli::try_parse_from(["sprout", "--name", "acme"]).unwrap();
        assert_eq!(cli.name, "acme");

        let cli = Cli::try_parse_from(["sprout", "-n", "sample"]).unwrap();
        assert_eq!(cli.name, "sample");
    }

    #[test]
    fn test_rejects_positional_and_unknown_flags() {
        assert!(Cli::try_parse_from(["sprout", "acme"]).is_err());
        assert!(Cli::try_parse_from(["sprout", "--output", "x"]).is_err());
    }
}

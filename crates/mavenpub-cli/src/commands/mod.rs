//! Command dispatch and handler modules.

mod check;
mod env;
mod pom;
mod publish;

use miette::Result;

use mavenpub_ops::Project;
use mavenpub_util::errors::PublishError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Publish {
            repository,
            dry_run,
            json,
        } => publish::exec(repository, dry_run, json).await,
        Command::Pom { output } => pom::exec(output.as_deref()),
        Command::Check => check::exec(cli.verbose),
        Command::Env { reveal } => env::exec(reveal),
    }
}

/// Load the project containing the current directory.
fn current_project() -> Result<Project> {
    let cwd = std::env::current_dir().map_err(PublishError::Io)?;
    tracing::debug!("Locating project from {}", cwd.display());
    Project::locate(&cwd)
}

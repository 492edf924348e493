//! CLI argument definitions for mavenpub.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mavenpub",
    version,
    about = "Publish library artifacts to Maven repositories",
    long_about = "mavenpub reads Mavenpub.toml, generates a POM and uploads the binary, \
                  sources and javadoc jars with checksums and maven-metadata.xml to a \
                  Maven repository such as Nexus or Artifactory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload the artifacts, POM and metadata to a repository
    Publish {
        /// Repository name from [repositories] (required when several are configured)
        #[arg(short, long)]
        repository: Option<String>,
        /// Validate and list what would be uploaded without sending anything
        #[arg(long)]
        dry_run: bool,
        /// Print the result as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Print the generated POM
    Pom {
        /// Write the POM to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check artifacts, repositories and the Java toolchain without publishing
    Check,

    /// Show where each repository's credentials come from (values masked)
    Env {
        /// Show actual values instead of masking them
        #[arg(long)]
        reveal: bool,
    },
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}

//! version-manager - bump the Cargo.toml version and commit it.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use realm_tools::logging;
use realm_tools::version::{update_version, BumpKind, GitCli, DEFAULT_MANIFEST};

const USAGE: &str = "Usage: version-manager [major|minor|patch|auto]";

/// Bump the version in Cargo.toml and commit the change.
#[derive(Parser, Debug)]
#[command(name = "version-manager")]
#[command(about = "Bump the version in Cargo.toml and commit the change")]
#[command(version)]
struct Cli {
    /// Bump kind: major, minor, patch, or auto (patch with reported failures)
    kind: String,

    /// Path to the manifest to update
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,
}

fn main() -> Result<ExitCode> {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", USAGE);
            return Ok(ExitCode::from(1));
        }
        Err(e) => {
            let _ = e.print();
            return Ok(ExitCode::from(1));
        }
    };

    let kind: BumpKind = cli.kind.parse()?;
    let git = GitCli::for_file(&cli.manifest);

    if kind == BumpKind::Auto {
        if let Err(e) = update_version(&cli.manifest, kind, &git) {
            println!("Error auto-bumping version: {}", e);
            return Ok(ExitCode::from(1));
        }
        return Ok(ExitCode::SUCCESS);
    }

    update_version(&cli.manifest, kind, &git)
        .with_context(|| format!("Failed to apply {} bump to {}", kind, cli.manifest.display()))?;

    Ok(ExitCode::SUCCESS)
}

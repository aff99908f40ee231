#![forbid(unsafe_code)]

use std::{env, path::PathBuf, process::exit};

use anyhow::Context;
use clap::Parser;
use multi_clone::{logging, AppConfig, CloneService, GitCloner, RepositoryLocator};
use tracing::{debug, error, warn};

/// Clone the GitHub repositories linked from downloaded assignment submissions.
///
/// Every folder named like `101768-164537 - First Last - Jan 25, 2025 204 PM`
/// is a submission. Only the latest submission per person is cloned, into its
/// own folder.
#[derive(Debug, Parser)]
#[command(name = "multi-clone", version)]
struct Cli {
    /// Folder holding the submission folders. Defaults to the current directory.
    folder: Option<PathBuf>,
}

fn main() {
    let dotenv = dotenvy::dotenv();

    logging::init("multi_clone=info");

    match dotenv {
        Ok(path) => debug!("Loaded config from {}", path.display()),
        Err(err) if err.not_found() => debug!("No .env file found"),
        Err(err) => warn!("Could not load config from .env file: {err}"),
    }

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        error!("{err:#}");
        exit(255);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Could not load app config")?;

    let folder = match cli.folder {
        Some(folder) => folder,
        None => {
            warn!("Expected a folder on the command line, using the current directory");
            env::current_dir().context("Could not get the current directory")?
        }
    };

    let locator = RepositoryLocator::from_config(&config)?;
    let service = CloneService::new(locator, GitCloner::new(&config.git_command));

    let summary = service
        .run(&folder)
        .context("Cannot resolve the submissions folder")?;

    print!("{summary}");

    Ok(())
}
